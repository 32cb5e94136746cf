use log::error;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Configuration error: {msg}")]
    ConfigurationError { msg: String },

    #[error("Missing config with key \"{key}\"")]
    MissingConfig { key: String },
}

impl AppError {
    /// Logs `error` with `context` under a fresh reference id and returns the id.
    pub fn log_with_ref(context: &str, error: &dyn std::fmt::Debug) -> Uuid {
        let ref_id = Uuid::new_v4();
        error!("[ref {}] {}: {:?}", ref_id, context, error);
        ref_id
    }
}

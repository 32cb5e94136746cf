use crate::bot::parser::ParseError;
use crate::bot::transport::TransportError;
use crate::model::LimitSetting;
use crate::service::error::ServiceError;

/// Failures a command can end in. None of these texts reach the chat.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BotError {
    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Can not bind a channel that is not within a guild")]
    NotInGuild,

    #[error("Missing argument for {setting}")]
    MissingArgument { setting: LimitSetting },

    #[error("Unable to parse input ({setting}) \"{input}\" to int")]
    InvalidNumber { setting: LimitSetting, input: String },

    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),

    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),

    #[error("TransportError: {0}")]
    Transport(#[from] TransportError),

    #[error("Internal error: {msg}")]
    Internal { msg: String },
}

impl BotError {
    /// Whether the error comes from a collaborator rather than the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::Service(_) | Self::Transport(_) | Self::Internal { .. }
        )
    }
}

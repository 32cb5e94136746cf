use std::path::PathBuf;

use crate::error::AppError;

/// Process-level configuration read from the environment.
///
/// Runtime-tunable bot settings (channel, role, vote limits) live in
/// [`crate::model::BotSettings`] instead; this only covers what is needed to boot.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub settings_path: PathBuf,
    pub logs_path: PathBuf,
    pub command_prefix: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            discord_token: String::new(),
            settings_path: PathBuf::from("data/settings.json"),
            logs_path: PathBuf::from("logs"),
            command_prefix: "!".to_string(),
        }
    }

    /// Loads values from the environment, keeping defaults for unset optional keys.
    ///
    /// Required:
    /// - `DISCORD_TOKEN`
    ///
    /// Optional:
    /// - `SETTINGS_PATH`: JSON file holding the runtime settings
    /// - `LOGS_PATH`: directory for rolling log files
    /// - `COMMAND_PREFIX`: prefix every command starts with
    pub fn load(&mut self) -> Result<(), AppError> {
        self.discord_token = std::env::var("DISCORD_TOKEN").map_err(|_| AppError::MissingConfig {
            key: "DISCORD_TOKEN".to_string(),
        })?;

        if let Ok(path) = std::env::var("SETTINGS_PATH") {
            self.settings_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("LOGS_PATH") {
            self.logs_path = PathBuf::from(path);
        }
        if let Ok(prefix) = std::env::var("COMMAND_PREFIX") {
            if prefix.is_empty() {
                return Err(AppError::ConfigurationError {
                    msg: "COMMAND_PREFIX must not be empty".to_string(),
                });
            }
            self.command_prefix = prefix;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::remove_var("DISCORD_TOKEN");
            std::env::remove_var("SETTINGS_PATH");
            std::env::remove_var("LOGS_PATH");
            std::env::remove_var("COMMAND_PREFIX");
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_load_requires_token() {
        clear_env();
        let mut config = Config::new();
        let err = config.load().unwrap_err();
        assert!(matches!(err, AppError::MissingConfig { key } if key == "DISCORD_TOKEN"));
    }

    #[test]
    #[serial_test::serial]
    fn test_load_keeps_defaults() {
        clear_env();
        unsafe { std::env::set_var("DISCORD_TOKEN", "token") };

        let mut config = Config::new();
        config.load().unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.settings_path, PathBuf::from("data/settings.json"));
        assert_eq!(config.command_prefix, "!");
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_load_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("DISCORD_TOKEN", "token");
            std::env::set_var("SETTINGS_PATH", "/tmp/votebot.json");
            std::env::set_var("COMMAND_PREFIX", "?");
        }

        let mut config = Config::new();
        config.load().unwrap();

        assert_eq!(config.settings_path, PathBuf::from("/tmp/votebot.json"));
        assert_eq!(config.command_prefix, "?");
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_load_rejects_empty_prefix() {
        clear_env();
        unsafe {
            std::env::set_var("DISCORD_TOKEN", "token");
            std::env::set_var("COMMAND_PREFIX", "");
        }

        let mut config = Config::new();
        assert!(matches!(
            config.load(),
            Err(AppError::ConfigurationError { .. })
        ));
        clear_env();
    }
}

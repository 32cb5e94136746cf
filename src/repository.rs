//! Durable storage for [`BotSettings`].

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use log::warn;

use crate::model::BotSettings;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RepositoryError {
    #[error("IO error on \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file \"{path}\": {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads and stores the settings record. Saves always overwrite the whole record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> Result<BotSettings, RepositoryError>;
    async fn save(&self, settings: &BotSettings) -> Result<(), RepositoryError>;
}

/// Settings stored as pretty-printed JSON on disk.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_err(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl SettingsRepository for JsonFileRepository {
    async fn load(&self) -> Result<BotSettings, RepositoryError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Settings file \"{}\" not found, starting with defaults.",
                    self.path.display()
                );
                return Ok(BotSettings::default());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        serde_json::from_slice(&raw).map_err(|source| RepositoryError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, settings: &BotSettings) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_err(e))?;
        }

        let json = serde_json::to_vec_pretty(settings).map_err(|source| {
            RepositoryError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        // Readers never observe a half-written file.
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| self.io_err(e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.io_err(e))?;

        debug!("Settings written to \"{}\".", self.path.display());
        Ok(())
    }
}

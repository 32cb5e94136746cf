//! Single owner of the runtime settings record.

use std::sync::Arc;

use log::info;
use tokio::sync::Mutex;

use crate::model::BotSettings;
use crate::model::LimitSetting;
use crate::repository::SettingsRepository;
use crate::service::error::ServiceError;

/// Guards [`BotSettings`] and keeps the persisted copy in step with memory.
///
/// Every mutation updates a copy, persists it, and only then commits it, all
/// while holding the lock. Concurrent writers are serialized, and a failed
/// persist leaves the in-memory settings untouched.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
    settings: Mutex<BotSettings>,
}

impl SettingsService {
    /// Loads the settings record from `repo`.
    ///
    /// # Performance
    /// * Repository calls: 1
    pub async fn load(repo: Arc<dyn SettingsRepository>) -> Result<Self, ServiceError> {
        let settings = repo.load().await?;
        info!(
            "Loaded settings: channel {:?}, master role {:?}.",
            settings.channel_id, settings.master_role_id
        );
        Ok(Self {
            repo,
            settings: Mutex::new(settings),
        })
    }

    /// Returns a copy of the current settings.
    pub async fn snapshot(&self) -> BotSettings {
        self.settings.lock().await.clone()
    }

    /// Binds the bot to `channel_id`.
    ///
    /// # Performance
    /// * Repository calls: 1
    pub async fn set_channel(&self, channel_id: u64) -> Result<BotSettings, ServiceError> {
        self.update(|settings| settings.channel_id = Some(channel_id))
            .await
    }

    /// Overwrites one integer setting. No range check is applied.
    ///
    /// # Performance
    /// * Repository calls: 1
    pub async fn set_limit(
        &self,
        setting: LimitSetting,
        value: i64,
    ) -> Result<BotSettings, ServiceError> {
        self.update(|settings| *settings.limit_mut(setting) = value)
            .await
    }

    async fn update<F>(&self, mutate: F) -> Result<BotSettings, ServiceError>
    where
        F: FnOnce(&mut BotSettings),
    {
        let mut guard = self.settings.lock().await;
        let mut next = guard.clone();
        mutate(&mut next);

        self.repo.save(&next).await?;
        *guard = next.clone();
        Ok(next)
    }
}

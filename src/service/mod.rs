use std::sync::Arc;

use crate::repository::SettingsRepository;
use crate::service::catalog_service::SongCatalog;
use crate::service::settings_service::SettingsService;

pub mod catalog_service;
pub mod error;
pub mod settings_service;

pub struct Services {
    pub settings: Arc<SettingsService>,
    pub catalog: Arc<dyn SongCatalog>,
}

impl Services {
    /// Loads the persisted settings once and wires up the services around them.
    pub async fn new(
        repo: Arc<dyn SettingsRepository>,
        catalog: Arc<dyn SongCatalog>,
    ) -> anyhow::Result<Self> {
        let settings = Arc::new(SettingsService::load(repo).await?);

        Ok(Self { settings, catalog })
    }
}

//! Song catalog access.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::Song;
use crate::service::error::ServiceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SongCatalog: Send + Sync {
    async fn all_songs(&self) -> Result<Vec<Song>, ServiceError>;
}

/// Catalog kept in process memory.
#[derive(Default)]
pub struct InMemoryCatalog {
    songs: RwLock<Vec<Song>>,
}

impl InMemoryCatalog {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs: RwLock::new(songs),
        }
    }
}

#[async_trait]
impl SongCatalog for InMemoryCatalog {
    async fn all_songs(&self) -> Result<Vec<Song>, ServiceError> {
        self.songs
            .read()
            .map(|songs| songs.clone())
            .map_err(|_| ServiceError::CatalogUnavailable {
                message: "catalog lock poisoned".to_string(),
            })
    }
}

use crate::repository::RepositoryError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("RepositoryError: {0}")]
    RepositoryError(#[from] RepositoryError),

    #[error("Catalog unavailable: {message}")]
    CatalogUnavailable { message: String },
}

use async_trait::async_trait;

use crate::modules::content::application::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Empty content until something was saved.
    async fn get(&self) -> Result<About, AboutRepositoryError>;

    async fn set(&self, about: About) -> Result<(), AboutRepositoryError>;
}

use actix_web::web::Bytes;
use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{AdminFile, AdminFileType};

/// File metadata plus content, as kept in one slot.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub meta: AdminFile,
    pub content: Bytes,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminFileRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait AdminFileRepository: Send + Sync {
    /// Overwrites whatever occupied the slot before.
    async fn put(&self, file: StoredFile) -> Result<(), AdminFileRepositoryError>;

    async fn get(
        &self,
        file_type: AdminFileType,
    ) -> Result<Option<StoredFile>, AdminFileRepositoryError>;
}

// src/modules/content/application/ports/outgoing/record_repository.rs

use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Command and query port for one record collection.
///
/// Ids are assigned by the repository on insert, start at 1 and are never
/// handed out twice, even after a delete.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// All records in ascending id order.
    async fn list(&self) -> Result<Vec<R>, RecordRepositoryError>;

    async fn insert(&self, draft: R::Draft) -> Result<R, RecordRepositoryError>;

    /// Replace every field but the id. `NotFound` when the id is unknown.
    async fn replace(&self, id: RecordId, draft: R::Draft) -> Result<R, RecordRepositoryError>;

    async fn remove(&self, id: RecordId) -> Result<(), RecordRepositoryError>;
}

use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Record not found")]
    NotFound,

    #[error("Field `{0}` is required")]
    MissingField(&'static str),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// List/create/update/delete for one admin-writable collection.
#[async_trait]
pub trait ManageRecordsUseCase<R: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, RecordError>;
    async fn create(&self, draft: R::Draft) -> Result<R, RecordError>;
    async fn update(&self, id: RecordId, draft: R::Draft) -> Result<R, RecordError>;
    async fn delete(&self, id: RecordId) -> Result<(), RecordError>;
}

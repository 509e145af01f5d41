use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::content::application::domain::entities::{ContactMessage, RecordId};

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Stores the message unread and assigns its id.
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    /// Idempotent: marking a read message again is not an error.
    async fn mark_read(&self, id: RecordId) -> Result<(), ContactMessageRepositoryError>;

    async fn remove(&self, id: RecordId) -> Result<(), ContactMessageRepositoryError>;
}

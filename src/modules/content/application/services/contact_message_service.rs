use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::content::application::domain::entities::{ContactMessage, RecordId};
use crate::modules::content::application::ports::incoming::use_cases::{
    ContactMessageError, ContactMessagesUseCase, ContactSubmission,
};
use crate::modules::content::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError, NewContactMessage,
};

pub struct ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: ContactMessageRepositoryError) -> ContactMessageError {
    match e {
        ContactMessageRepositoryError::NotFound => ContactMessageError::NotFound,
        ContactMessageRepositoryError::StorageError(msg) => ContactMessageError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> ContactMessagesUseCase for ContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactMessageError> {
        let stored = self
            .repository
            .insert(NewContactMessage {
                name: submission.name().to_string(),
                email: submission.email().to_string(),
                message: submission.message().to_string(),
                created_at: Utc::now(),
            })
            .await
            .map_err(map_err)?;

        info!(id = stored.id, "contact message received");
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageError> {
        self.repository.list().await.map_err(map_err)
    }

    async fn mark_read(&self, id: RecordId) -> Result<(), ContactMessageError> {
        self.repository.mark_read(id).await.map_err(map_err)
    }

    async fn delete(&self, id: RecordId) -> Result<(), ContactMessageError> {
        self.repository.remove(id).await.map_err(map_err)
    }
}

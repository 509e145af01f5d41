use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::content::application::domain::entities::{ContactMessage, RecordId};
use crate::modules::content::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError, NewContactMessage,
};

#[derive(Debug)]
struct Inbox {
    messages: BTreeMap<RecordId, ContactMessage>,
    next_id: RecordId,
}

#[derive(Debug, Clone)]
pub struct InMemoryContactMessageRepository {
    inbox: Arc<RwLock<Inbox>>,
}

impl Default for InMemoryContactMessageRepository {
    fn default() -> Self {
        Self {
            inbox: Arc::new(RwLock::new(Inbox {
                messages: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let mut inbox = self.inbox.write().await;
        let id = inbox.next_id;
        inbox.next_id += 1;

        let stored = ContactMessage {
            id,
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: message.created_at,
            read: false,
        };
        inbox.messages.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let inbox = self.inbox.read().await;
        Ok(inbox.messages.values().rev().cloned().collect())
    }

    async fn mark_read(&self, id: RecordId) -> Result<(), ContactMessageRepositoryError> {
        let mut inbox = self.inbox.write().await;
        let message = inbox
            .messages
            .get_mut(&id)
            .ok_or(ContactMessageRepositoryError::NotFound)?;
        message.read = true;
        Ok(())
    }

    async fn remove(&self, id: RecordId) -> Result<(), ContactMessageRepositoryError> {
        let mut inbox = self.inbox.write().await;
        inbox
            .messages
            .remove(&id)
            .map(|_| ())
            .ok_or(ContactMessageRepositoryError::NotFound)
    }
}

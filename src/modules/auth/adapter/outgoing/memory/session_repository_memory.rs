use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::modules::auth::application::ports::outgoing::{
    AdminSessionRepository, AdminSessionRepositoryError, StoredSession,
};

/// Sessions keyed by token hash. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminSessionRepository {
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
}

impl InMemoryAdminSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminSessionRepository for InMemoryAdminSessionRepository {
    async fn insert(&self, session: StoredSession) -> Result<(), AdminSessionRepositoryError> {
        self.sessions
            .write()
            .await
            .insert(session.token_hash.clone(), session);
        Ok(())
    }

    async fn find(
        &self,
        token_hash: &str,
    ) -> Result<Option<StoredSession>, AdminSessionRepositoryError> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }

    async fn remove(&self, token_hash: &str) -> Result<(), AdminSessionRepositoryError> {
        self.sessions.write().await.remove(token_hash);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AdminSessionRepositoryError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        Ok(before - sessions.len())
    }
}

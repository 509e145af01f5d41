use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A server-side session record. Only the SHA-256 of the bearer token is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token_hash: String,
    pub principal: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminSessionRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait AdminSessionRepository: Send + Sync {
    async fn insert(&self, session: StoredSession) -> Result<(), AdminSessionRepositoryError>;

    async fn find(
        &self,
        token_hash: &str,
    ) -> Result<Option<StoredSession>, AdminSessionRepositoryError>;

    /// Removing an unknown hash is not an error.
    async fn remove(&self, token_hash: &str) -> Result<(), AdminSessionRepositoryError>;

    /// Drops every session expired at `now`; returns how many went.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AdminSessionRepositoryError>;
}

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::SessionToken;

/// The one key the admin token is persisted under.
pub const TOKEN_STORAGE_KEY: &str = "admin_session_token";

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("Token storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token storage is corrupt: {0}")]
    Corrupt(String),
}

/// Durable home of the admin session token between runs.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<SessionToken>, TokenStoreError>;
    async fn save(&self, token: &SessionToken) -> Result<(), TokenStoreError>;
    async fn clear(&self) -> Result<(), TokenStoreError>;
}

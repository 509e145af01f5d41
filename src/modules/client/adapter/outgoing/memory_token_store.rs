use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::auth::application::domain::entities::SessionToken;
use crate::modules::client::application::ports::{TokenStore, TokenStoreError};

/// Token storage that forgets everything on exit. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<RwLock<Option<SessionToken>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> Result<Option<SessionToken>, TokenStoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &SessionToken) -> Result<(), TokenStoreError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.write().await = None;
        Ok(())
    }
}

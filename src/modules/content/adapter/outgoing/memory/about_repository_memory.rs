use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::content::application::domain::entities::About;
use crate::modules::content::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryAboutRepository {
    about: Arc<RwLock<About>>,
}

impl InMemoryAboutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AboutRepository for InMemoryAboutRepository {
    async fn get(&self) -> Result<About, AboutRepositoryError> {
        Ok(self.about.read().await.clone())
    }

    async fn set(&self, about: About) -> Result<(), AboutRepositoryError> {
        *self.about.write().await = about;
        Ok(())
    }
}

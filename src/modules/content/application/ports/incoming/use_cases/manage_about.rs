use async_trait::async_trait;

use crate::modules::content::application::domain::entities::About;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AboutError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ManageAboutUseCase: Send + Sync {
    async fn get(&self) -> Result<About, AboutError>;
    async fn update(&self, content: String) -> Result<About, AboutError>;
}

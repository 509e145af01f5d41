use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile name cannot be empty")]
    EmptyName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CallerProfileUseCase: Send + Sync {
    async fn get(&self, principal: &str) -> Result<Option<UserProfile>, ProfileError>;

    async fn save(&self, principal: &str, profile: UserProfile)
        -> Result<UserProfile, ProfileError>;
}

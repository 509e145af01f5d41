use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Profiles keyed by admin principal.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, principal: &str) -> Result<Option<UserProfile>, ProfileRepositoryError>;

    async fn save(
        &self,
        principal: &str,
        profile: UserProfile,
    ) -> Result<UserProfile, ProfileRepositoryError>;
}

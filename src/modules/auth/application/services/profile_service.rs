use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    CallerProfileUseCase, ProfileError,
};
use crate::modules::auth::application::ports::outgoing::ProfileRepository;

pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CallerProfileUseCase for ProfileService<R>
where
    R: ProfileRepository,
{
    async fn get(&self, principal: &str) -> Result<Option<UserProfile>, ProfileError> {
        self.repository
            .get(principal)
            .await
            .map_err(|e| ProfileError::RepositoryError(e.to_string()))
    }

    async fn save(
        &self,
        principal: &str,
        profile: UserProfile,
    ) -> Result<UserProfile, ProfileError> {
        let name = profile.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let saved = self
            .repository
            .save(
                principal,
                UserProfile {
                    name: name.to_string(),
                },
            )
            .await
            .map_err(|e| ProfileError::RepositoryError(e.to_string()))?;

        info!(principal = %principal, "Profile saved");
        Ok(saved)
    }
}

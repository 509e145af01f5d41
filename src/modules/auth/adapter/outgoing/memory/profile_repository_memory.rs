use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, principal: &str) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        Ok(self.profiles.read().await.get(principal).cloned())
    }

    async fn save(
        &self,
        principal: &str,
        profile: UserProfile,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        self.profiles
            .write()
            .await
            .insert(principal.to_string(), profile.clone());
        Ok(profile)
    }
}

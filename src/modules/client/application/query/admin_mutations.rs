use std::future::Future;
use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::client::application::ports::{ContentApi, RecordApi, RemoteError};
use crate::modules::client::application::query::{QueryCache, QueryKey, RecordKey};
use crate::modules::client::application::session::AdminSessionManager;
use crate::modules::content::application::domain::entities::{About, RecordId};

pub const SESSION_EXPIRED_NOTICE: &str =
    "Your session has expired or is invalid. Please log in again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to {action}: {source}")]
pub struct MutationError {
    pub action: String,
    pub source: RemoteError,
}

impl MutationError {
    pub fn is_unauthorized(&self) -> bool {
        self.source.is_unauthorized()
    }

    /// One-line notice for the admin.
    pub fn notice(&self) -> String {
        if self.is_unauthorized() {
            SESSION_EXPIRED_NOTICE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Admin writes. A success invalidates only its own cache key, and only
/// after the service confirmed it.
#[derive(Clone)]
pub struct AdminMutations {
    api: Arc<dyn ContentApi>,
    cache: Arc<QueryCache>,
    session: Arc<AdminSessionManager>,
}

impl AdminMutations {
    pub fn new(
        api: Arc<dyn ContentApi>,
        cache: Arc<QueryCache>,
        session: Arc<AdminSessionManager>,
    ) -> Self {
        Self {
            api,
            cache,
            session,
        }
    }

    pub async fn create<R>(&self, draft: R::Draft) -> Result<R, MutationError>
    where
        R: RecordKey,
        dyn ContentApi: RecordApi<R>,
    {
        let action = format!("create {}", R::LABEL);
        self.mutate(R::KEY, action, || {
            RecordApi::<R>::create(self.api.as_ref(), draft)
        })
        .await
    }

    pub async fn update<R>(&self, id: RecordId, draft: R::Draft) -> Result<R, MutationError>
    where
        R: RecordKey,
        dyn ContentApi: RecordApi<R>,
    {
        let action = format!("update {}", R::LABEL);
        self.mutate(R::KEY, action, || {
            RecordApi::<R>::update(self.api.as_ref(), id, draft)
        })
        .await
    }

    pub async fn delete<R>(&self, id: RecordId) -> Result<(), MutationError>
    where
        R: RecordKey,
        dyn ContentApi: RecordApi<R>,
    {
        let action = format!("delete {}", R::LABEL);
        self.mutate(R::KEY, action, || {
            RecordApi::<R>::delete(self.api.as_ref(), id)
        })
        .await
    }

    pub async fn update_about(&self, content: &str) -> Result<About, MutationError> {
        self.mutate(QueryKey::About, "update about section".to_string(), || {
            self.api.update_about(content)
        })
        .await
    }

    pub async fn mark_message_read(&self, id: RecordId) -> Result<(), MutationError> {
        self.mutate(
            QueryKey::ContactMessages,
            "mark message as read".to_string(),
            || self.api.mark_message_read(id),
        )
        .await
    }

    pub async fn delete_message(&self, id: RecordId) -> Result<(), MutationError> {
        self.mutate(
            QueryKey::ContactMessages,
            "delete message".to_string(),
            || self.api.delete_message(id),
        )
        .await
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> Result<UserProfile, MutationError> {
        self.mutate(
            QueryKey::CurrentUserProfile,
            "save profile".to_string(),
            || self.api.save_caller_profile(profile),
        )
        .await
    }

    async fn mutate<T, F, Fut>(
        &self,
        key: QueryKey,
        action: String,
        op: F,
    ) -> Result<T, MutationError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        if self.session.token().is_none() {
            return Err(MutationError {
                action,
                source: RemoteError::Unauthorized("no admin session".to_string()),
            });
        }

        match op().await {
            Ok(value) => {
                self.cache.invalidate(key);
                info!(key = %key, action = %action, "Admin change saved");
                Ok(value)
            }
            Err(source) => {
                if source.is_unauthorized() {
                    self.session.handle_unauthorized().await;
                } else {
                    warn!(key = %key, action = %action, error = %source, "Admin change failed");
                }
                Err(MutationError { action, source })
            }
        }
    }
}

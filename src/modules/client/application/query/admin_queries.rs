use std::future::Future;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::client::application::ports::{ContentApi, RemoteError};
use crate::modules::client::application::query::{run_query, QueryCache, QueryKey};
use crate::modules::client::application::session::AdminSessionManager;
use crate::modules::content::application::domain::entities::ContactMessage;

/// Cached admin-only reads. Signed out is an error here, never an empty
/// result.
#[derive(Clone)]
pub struct AdminQueries {
    api: Arc<dyn ContentApi>,
    cache: Arc<QueryCache>,
    session: Arc<AdminSessionManager>,
}

impl AdminQueries {
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

    /// Newest first.
    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, RemoteError> {
        self.guarded(QueryKey::ContactMessages, || self.api.list_contact_messages())
            .await
    }

    pub async fn caller_profile(&self) -> Result<Option<UserProfile>, RemoteError> {
        self.guarded(QueryKey::CurrentUserProfile, || {
            self.api.get_caller_profile()
        })
        .await
    }

    async fn guarded<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, RemoteError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        if self.session.token().is_none() {
            return Err(RemoteError::Unauthorized("no admin session".to_string()));
        }

        let result = run_query(&self.cache, key, fetch).await;
        if let Err(RemoteError::Unauthorized(_)) = &result {
            self.session.handle_unauthorized().await;
        }
        result
    }
}

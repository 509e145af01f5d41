use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::modules::auth::application::domain::entities::{
    AdminSession, CreateSessionResponse, SessionToken,
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginRequest, AdminLoginRequestError,
};
use crate::modules::client::application::config::DEFAULT_VALIDITY_TTL;
use crate::modules::client::application::ports::{
    ContentApi, RemoteError, TokenStore, TokenStoreError,
};
use crate::modules::client::application::query::{QueryCache, QueryKey};
use crate::modules::client::application::session::{normalize_admin_auth_error, TokenBroadcast};

/// Attempts before a validity check racing with token changes gives up.
const MAX_CHECK_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Validation(#[from] AdminLoginRequestError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Login failed: {0}")]
    Failure(String),

    #[error(transparent)]
    Remote(RemoteError),
}

impl LoginError {
    /// Copy to show next to the login form.
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Validation(_) => "Please enter both email and password".to_string(),
            LoginError::InvalidCredentials => {
                "Invalid email or password. Please try again.".to_string()
            }
            LoginError::Failure(reason) => format!("Login failed: {}", reason),
            LoginError::Remote(e) => normalize_admin_auth_error(&e.to_string()).to_string(),
        }
    }
}

struct ValidityCheck {
    token: SessionToken,
    valid: bool,
    checked_at: Instant,
}

/// Owns the admin token for the whole process: persistence, broadcast to
/// every consumer, and the cached answer to "is it still valid".
pub struct AdminSessionManager {
    api: Arc<dyn ContentApi>,
    store: Arc<dyn TokenStore>,
    broadcast: TokenBroadcast,
    cache: Arc<QueryCache>,
    validity: Mutex<Option<ValidityCheck>>,
    validity_ttl: Duration,
}

impl AdminSessionManager {
    pub fn new(
        api: Arc<dyn ContentApi>,
        store: Arc<dyn TokenStore>,
        broadcast: TokenBroadcast,
        cache: Arc<QueryCache>,
    ) -> Self {
        Self {
            api,
            store,
            broadcast,
            cache,
            validity: Mutex::new(None),
            validity_ttl: DEFAULT_VALIDITY_TTL,
        }
    }

    pub fn with_validity_ttl(mut self, ttl: Duration) -> Self {
        self.validity_ttl = ttl;
        self
    }

    /// Picks up a token persisted by an earlier run.
    pub async fn restore(&self) -> Result<bool, TokenStoreError> {
        let token = self.store.load().await?.filter(|t| !t.is_empty());
        let restored = token.is_some();
        self.broadcast.publish(token);
        self.forget_validity();

        if restored {
            info!("Restored persisted admin session");
        }
        Ok(restored)
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.broadcast.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SessionToken>> {
        self.broadcast.subscribe()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AdminSession, LoginError> {
        let request = AdminLoginRequest::new(email.to_string(), password.to_string())?;

        let response = self
            .api
            .create_session(&request)
            .await
            .map_err(LoginError::Remote)?;

        match response {
            CreateSessionResponse::Ok { session } => {
                if let Err(e) = self.store.save(&session.session_token).await {
                    warn!(error = %e, "Admin token could not be persisted; session lasts until exit");
                }
                self.broadcast.publish(Some(session.session_token.clone()));
                self.forget_validity();

                info!(principal = %session.principal, "Admin signed in");
                Ok(session)
            }
            CreateSessionResponse::InvalidCredentials => {
                info!("Admin sign-in refused: invalid credentials");
                Err(LoginError::InvalidCredentials)
            }
            CreateSessionResponse::Failure { reason } => {
                warn!(reason = %reason, "Admin sign-in failed");
                Err(LoginError::Failure(reason))
            }
        }
    }

    /// True only with a token the service currently accepts. Any failure to
    /// find out counts as false and is not remembered.
    pub async fn is_authenticated(&self) -> bool {
        for _ in 0..MAX_CHECK_ATTEMPTS {
            let Some(token) = self.token() else {
                return false;
            };

            if let Some(valid) = self.cached_validity(&token) {
                return valid;
            }

            let result = self.api.validate_session(&token).await;

            if self.token().as_ref() != Some(&token) {
                debug!("Token changed during validity check, result discarded");
                continue;
            }

            return match result {
                Ok(valid) => {
                    self.remember_validity(token, valid);
                    valid
                }
                Err(e) => {
                    warn!(error = %e, "Session validity check failed, treating as signed out");
                    false
                }
            };
        }

        false
    }

    /// Revokes the session remotely, then clears it locally no matter how
    /// the remote call went. The remote outcome is returned for reporting.
    pub async fn logout(&self) -> Result<(), RemoteError> {
        let remote = match self.token() {
            Some(_) => self.api.logout().await,
            None => Ok(()),
        };

        if let Err(e) = &remote {
            warn!(error = %e, "Remote logout failed; clearing local session anyway");
        }

        self.clear_local().await;
        info!("Admin signed out");
        remote
    }

    /// Called when the service rejected an admin call as unauthorized.
    pub async fn handle_unauthorized(&self) {
        if self.token().is_some() {
            warn!("Admin session rejected by the service; signing out locally");
        }
        self.clear_local().await;
    }

    async fn clear_local(&self) {
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "Persisted admin token could not be removed");
        }
        self.broadcast.publish(None);
        self.forget_validity();

        for key in QueryKey::ALL.into_iter().filter(QueryKey::is_admin_only) {
            self.cache.remove(key);
        }
    }

    fn validity(&self) -> MutexGuard<'_, Option<ValidityCheck>> {
        self.validity
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cached_validity(&self, token: &SessionToken) -> Option<bool> {
        self.validity()
            .as_ref()
            .filter(|check| &check.token == token && check.checked_at.elapsed() < self.validity_ttl)
            .map(|check| check.valid)
    }

    fn remember_validity(&self, token: SessionToken, valid: bool) {
        *self.validity() = Some(ValidityCheck {
            token,
            valid,
            checked_at: Instant::now(),
        });
    }

    fn forget_validity(&self) {
        *self.validity() = None;
    }
}

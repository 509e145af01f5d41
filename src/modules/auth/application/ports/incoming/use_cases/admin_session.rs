use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AdminIdentity, SessionToken};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves a bearer token to the admin it belongs to.
#[async_trait]
pub trait ValidateAdminSessionUseCase: Send + Sync {
    /// `None` for unknown, revoked and expired tokens alike.
    async fn validate(&self, token: &SessionToken) -> Result<Option<AdminIdentity>, SessionError>;
}

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    /// Revokes the session. Revoking an unknown token succeeds.
    async fn logout(&self, token: &SessionToken) -> Result<(), SessionError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::{
    AdminIdentity, AdminSession, SessionToken,
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginRequest, CreateAdminSessionUseCase, CreateSessionError, LogoutAdminUseCase,
    SessionError, ValidateAdminSessionUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    AdminSessionRepository, PasswordHasher, StoredSession,
};
use crate::modules::auth::application::services::token_hasher::{
    generate_session_token, hash_token,
};

/// The single admin account this site knows about.
#[derive(Clone)]
pub struct AdminAccount {
    email: String,
    password_hash: String,
    principal: String,
}

impl AdminAccount {
    pub fn new(email: &str, password_hash: impl Into<String>, principal: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash: password_hash.into(),
            principal: principal.to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("principal", &self.principal)
            .finish_non_exhaustive()
    }
}

pub struct AdminSessionService<R>
where
    R: AdminSessionRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    account: AdminAccount,
    ttl: Duration,
}

impl<R> AdminSessionService<R>
where
    R: AdminSessionRepository,
{
    pub fn new(
        repository: R,
        hasher: Arc<dyn PasswordHasher>,
        account: AdminAccount,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            hasher,
            account,
            ttl,
        }
    }
}

#[async_trait]
impl<R> CreateAdminSessionUseCase for AdminSessionService<R>
where
    R: AdminSessionRepository,
{
    async fn execute(
        &self,
        request: AdminLoginRequest,
    ) -> Result<AdminSession, CreateSessionError> {
        if request.email() != self.account.email {
            warn!("Admin login rejected: unknown email");
            return Err(CreateSessionError::InvalidCredentials);
        }

        let is_valid = self
            .hasher
            .verify_password(request.password(), &self.account.password_hash)
            .await
            .map_err(|e| CreateSessionError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!("Admin login rejected: wrong password");
            return Err(CreateSessionError::InvalidCredentials);
        }

        let now = Utc::now();

        match self.repository.purge_expired(now).await {
            Ok(0) => {}
            Ok(purged) => info!(purged, "Expired admin sessions purged"),
            Err(e) => warn!(error = %e, "Could not purge expired admin sessions"),
        }

        let token = generate_session_token();
        self.repository
            .insert(StoredSession {
                token_hash: hash_token(token.as_str()),
                principal: self.account.principal.clone(),
                email: self.account.email.clone(),
                created_at: now,
                expires_at: now + self.ttl,
            })
            .await
            .map_err(|e| CreateSessionError::RepositoryError(e.to_string()))?;

        info!(principal = %self.account.principal, "Admin session created");

        Ok(AdminSession {
            principal: self.account.principal.clone(),
            created_at: now,
            email: self.account.email.clone(),
            session_token: token,
        })
    }
}

#[async_trait]
impl<R> ValidateAdminSessionUseCase for AdminSessionService<R>
where
    R: AdminSessionRepository,
{
    async fn validate(&self, token: &SessionToken) -> Result<Option<AdminIdentity>, SessionError> {
        if token.is_empty() {
            return Ok(None);
        }

        let token_hash = hash_token(token.as_str());
        let stored = self
            .repository
            .find(&token_hash)
            .await
            .map_err(|e| SessionError::RepositoryError(e.to_string()))?;

        match stored {
            Some(session) if session.is_expired(Utc::now()) => {
                self.repository
                    .remove(&token_hash)
                    .await
                    .map_err(|e| SessionError::RepositoryError(e.to_string()))?;
                Ok(None)
            }
            Some(session) => Ok(Some(AdminIdentity {
                principal: session.principal,
                email: session.email,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<R> LogoutAdminUseCase for AdminSessionService<R>
where
    R: AdminSessionRepository,
{
    async fn logout(&self, token: &SessionToken) -> Result<(), SessionError> {
        self.repository
            .remove(&hash_token(token.as_str()))
            .await
            .map_err(|e| SessionError::RepositoryError(e.to_string()))?;

        info!("Admin session revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::memory::InMemoryAdminSessionRepository;
    use crate::modules::auth::application::ports::outgoing::{
        AdminSessionRepositoryError, HashError,
    };
    use chrono::DateTime;
    use mockall::mock;

    mock! {
        pub Hasher {}

        #[async_trait]
        impl PasswordHasher for Hasher {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    fn account() -> AdminAccount {
        AdminAccount::new("Owner@Example.com", "$argon2id$stub", "admin")
    }

    fn hasher_accepting(password: &'static str) -> Arc<dyn PasswordHasher> {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify_password()
            .returning(move |given, _| Ok(given == password));
        Arc::new(hasher)
    }

    fn request(email: &str, password: &str) -> AdminLoginRequest {
        AdminLoginRequest::new(email.to_string(), password.to_string()).unwrap()
    }

    fn service(
        repo: InMemoryAdminSessionRepository,
        ttl: Duration,
    ) -> AdminSessionService<InMemoryAdminSessionRepository> {
        AdminSessionService::new(repo, hasher_accepting("hunter2"), account(), ttl)
    }

    #[tokio::test]
    async fn test_login_issues_a_token_that_validates() {
        let repo = InMemoryAdminSessionRepository::new();
        let svc = service(repo.clone(), Duration::hours(1));

        let session = svc
            .execute(request("owner@example.com", "hunter2"))
            .await
            .unwrap();

        assert_eq!(session.principal, "admin");
        assert_eq!(session.email, "owner@example.com");

        let identity = svc.validate(&session.session_token).await.unwrap();
        assert_eq!(
            identity,
            Some(AdminIdentity {
                principal: "admin".to_string(),
                email: "owner@example.com".to_string(),
            })
        );

        // Only the hash is stored.
        let stored = repo
            .find(&hash_token(session.session_token.as_str()))
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.token_hash, session.session_token.as_str());
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let svc = service(InMemoryAdminSessionRepository::new(), Duration::hours(1));

        let result = svc.execute(request("owner@example.com", "nope")).await;

        assert_eq!(result.unwrap_err(), CreateSessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_unknown_email_never_reaches_the_hasher() {
        let mut hasher = MockHasher::new();
        hasher.expect_verify_password().never();
        let svc = AdminSessionService::new(
            InMemoryAdminSessionRepository::new(),
            Arc::new(hasher),
            account(),
            Duration::hours(1),
        );

        let result = svc.execute(request("someone@example.com", "hunter2")).await;

        assert_eq!(result.unwrap_err(), CreateSessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_broken_hash_is_a_failure_not_invalid_credentials() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify_password()
            .times(1)
            .returning(|_, hash| {
                assert_eq!(hash, "$argon2id$stub");
                Err(HashError::MalformedHash)
            });
        let svc = AdminSessionService::new(
            InMemoryAdminSessionRepository::new(),
            Arc::new(hasher),
            account(),
            Duration::hours(1),
        );

        let result = svc.execute(request("owner@example.com", "hunter2")).await;

        assert!(matches!(
            result,
            Err(CreateSessionError::PasswordVerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_logout_revokes_only_that_session() {
        let svc = service(InMemoryAdminSessionRepository::new(), Duration::hours(1));
        let first = svc
            .execute(request("owner@example.com", "hunter2"))
            .await
            .unwrap();
        let second = svc
            .execute(request("owner@example.com", "hunter2"))
            .await
            .unwrap();

        svc.logout(&first.session_token).await.unwrap();

        assert_eq!(svc.validate(&first.session_token).await.unwrap(), None);
        assert!(svc.validate(&second.session_token).await.unwrap().is_some());

        // Revoking twice is fine.
        svc.logout(&first.session_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_does_not_validate() {
        let svc = service(InMemoryAdminSessionRepository::new(), Duration::seconds(-1));
        let session = svc
            .execute(request("owner@example.com", "hunter2"))
            .await
            .unwrap();

        assert_eq!(svc.validate(&session.session_token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_and_unknown_tokens_do_not_validate() {
        let svc = service(InMemoryAdminSessionRepository::new(), Duration::hours(1));

        assert_eq!(svc.validate(&SessionToken::new("")).await.unwrap(), None);
        assert_eq!(
            svc.validate(&SessionToken::new("deadbeef")).await.unwrap(),
            None
        );
    }

    struct FailingSessionRepo;

    #[async_trait]
    impl AdminSessionRepository for FailingSessionRepo {
        async fn insert(&self, _s: StoredSession) -> Result<(), AdminSessionRepositoryError> {
            Err(AdminSessionRepositoryError::StorageError("down".to_string()))
        }

        async fn find(
            &self,
            _h: &str,
        ) -> Result<Option<StoredSession>, AdminSessionRepositoryError> {
            Err(AdminSessionRepositoryError::StorageError("down".to_string()))
        }

        async fn remove(&self, _h: &str) -> Result<(), AdminSessionRepositoryError> {
            Err(AdminSessionRepositoryError::StorageError("down".to_string()))
        }

        async fn purge_expired(
            &self,
            _now: DateTime<Utc>,
        ) -> Result<usize, AdminSessionRepositoryError> {
            Err(AdminSessionRepositoryError::StorageError("down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_storage_failures_surface_as_repository_errors() {
        let svc = AdminSessionService::new(
            FailingSessionRepo,
            hasher_accepting("hunter2"),
            account(),
            Duration::hours(1),
        );

        assert!(matches!(
            svc.execute(request("owner@example.com", "hunter2")).await,
            Err(CreateSessionError::RepositoryError(_))
        ));
        assert!(matches!(
            svc.validate(&SessionToken::new("abc")).await,
            Err(SessionError::RepositoryError(_))
        ));
    }
}

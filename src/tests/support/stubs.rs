use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::domain::entities::{
    AdminIdentity, AdminSession, SessionToken,
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginRequest, CreateAdminSessionUseCase, CreateSessionError, LogoutAdminUseCase,
    SessionError, ValidateAdminSessionUseCase,
};
use crate::modules::content::application::domain::entities::{Record, RecordId};
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageRecordsUseCase, RecordError,
};
use crate::tests::support::auth_helper::TEST_ADMIN_TOKEN;

/// Accepts exactly [`TEST_ADMIN_TOKEN`]; logs anyone in with it.
#[derive(Clone, Copy, Default)]
pub struct StubAdminSessions;

#[async_trait]
impl CreateAdminSessionUseCase for StubAdminSessions {
    async fn execute(&self, request: AdminLoginRequest) -> Result<AdminSession, CreateSessionError> {
        Ok(AdminSession {
            principal: "admin".to_string(),
            created_at: Utc::now(),
            email: request.email().to_string(),
            session_token: SessionToken::new(TEST_ADMIN_TOKEN),
        })
    }
}

#[async_trait]
impl ValidateAdminSessionUseCase for StubAdminSessions {
    async fn validate(&self, token: &SessionToken) -> Result<Option<AdminIdentity>, SessionError> {
        Ok((token.as_str() == TEST_ADMIN_TOKEN).then(|| AdminIdentity {
            principal: "admin".to_string(),
            email: "owner@example.com".to_string(),
        }))
    }
}

#[async_trait]
impl LogoutAdminUseCase for StubAdminSessions {
    async fn logout(&self, _token: &SessionToken) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Every call fails as if storage were down.
#[derive(Clone, Copy, Default)]
pub struct FailingRecords;

#[async_trait]
impl<R: Record> ManageRecordsUseCase<R> for FailingRecords {
    async fn list(&self) -> Result<Vec<R>, RecordError> {
        Err(RecordError::RepositoryError("storage offline".to_string()))
    }

    async fn create(&self, _draft: R::Draft) -> Result<R, RecordError> {
        Err(RecordError::RepositoryError("storage offline".to_string()))
    }

    async fn update(&self, _id: RecordId, _draft: R::Draft) -> Result<R, RecordError> {
        Err(RecordError::RepositoryError("storage offline".to_string()))
    }

    async fn delete(&self, _id: RecordId) -> Result<(), RecordError> {
        Err(RecordError::RepositoryError("storage offline".to_string()))
    }
}

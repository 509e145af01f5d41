use std::sync::Arc;

use actix_web::web::Bytes;
use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{
    CreateSessionResponse, SessionToken, UserProfile,
};
use crate::modules::auth::application::ports::incoming::use_cases::AdminLoginRequest;
use crate::modules::client::application::ports::ProgressObserver;
use crate::modules::content::application::domain::entities::{
    About, AdminFile, AdminFileType, ContactMessage, Experience, Project, Record, RecordId,
    SocialLink, Skill,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The service refused the payload (bad field, size or content type).
    #[error("Rejected: {0}")]
    Validation(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unreadable response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RemoteError::Unauthorized(_))
    }
}

/// A validated file on its way to an admin slot.
#[derive(Clone)]
pub struct FileUpload {
    pub file_type: AdminFileType,
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_type", &self.file_type)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.content.len())
            .finish()
    }
}

/// CRUD over one record collection.
#[async_trait]
pub trait RecordApi<R: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, RemoteError>;
    async fn create(&self, draft: R::Draft) -> Result<R, RemoteError>;
    async fn update(&self, id: RecordId, draft: R::Draft) -> Result<R, RemoteError>;
    async fn delete(&self, id: RecordId) -> Result<(), RemoteError>;
}

/// Every remote operation the site needs from the content service.
///
/// Implementations attach the current admin token, when there is one, to
/// each call. Optional results arrive already normalised to [`Option`].
#[async_trait]
pub trait ContentApi:
    RecordApi<Project> + RecordApi<Skill> + RecordApi<Experience> + RecordApi<SocialLink>
{
    async fn get_about(&self) -> Result<About, RemoteError>;
    async fn update_about(&self, content: &str) -> Result<About, RemoteError>;

    async fn submit_contact_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, RemoteError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, RemoteError>;
    async fn mark_message_read(&self, id: RecordId) -> Result<(), RemoteError>;
    async fn delete_message(&self, id: RecordId) -> Result<(), RemoteError>;

    async fn get_admin_file(&self, file_type: AdminFileType)
        -> Result<Option<AdminFile>, RemoteError>;
    async fn upload_admin_file(
        &self,
        upload: FileUpload,
        progress: Option<Arc<dyn ProgressObserver>>,
    ) -> Result<AdminFile, RemoteError>;

    async fn create_session(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<CreateSessionResponse, RemoteError>;
    async fn validate_session(&self, token: &SessionToken) -> Result<bool, RemoteError>;
    async fn logout(&self) -> Result<(), RemoteError>;
    async fn is_caller_admin(&self) -> Result<bool, RemoteError>;
    async fn initialize(&self) -> Result<(), RemoteError>;

    async fn get_caller_profile(&self) -> Result<Option<UserProfile>, RemoteError>;
    async fn save_caller_profile(&self, profile: &UserProfile)
        -> Result<UserProfile, RemoteError>;
}

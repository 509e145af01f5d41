use actix_web::web::Bytes;
use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{AdminFile, AdminFileType};
use crate::modules::content::application::domain::policies::upload_policy::{
    UploadPolicy, UploadValidationError,
};

/// A file that already passed its slot's [`UploadPolicy`].
#[derive(Debug, Clone)]
pub struct UploadAdminFileCommand {
    file_type: AdminFileType,
    file_name: String,
    content_type: String,
    content: Bytes,
}

impl UploadAdminFileCommand {
    pub fn new(
        file_type: AdminFileType,
        file_name: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<Self, UploadValidationError> {
        UploadPolicy::for_slot(file_type).validate(file_name, content_type, content.len() as u64)?;

        Ok(Self {
            file_type,
            file_name: file_name.trim().to_string(),
            content_type: content_type.to_string(),
            content,
        })
    }

    pub fn file_type(&self) -> AdminFileType {
        self.file_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminFileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AdminFilesUseCase: Send + Sync {
    async fn upload(&self, command: UploadAdminFileCommand) -> Result<AdminFile, AdminFileError>;

    async fn get(&self, file_type: AdminFileType) -> Result<Option<AdminFile>, AdminFileError>;

    async fn content(
        &self,
        file_type: AdminFileType,
    ) -> Result<Option<(AdminFile, Bytes)>, AdminFileError>;
}

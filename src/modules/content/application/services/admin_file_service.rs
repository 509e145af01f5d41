use actix_web::web::Bytes;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    AdminFile, AdminFileType, BlobRef,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    AdminFileError, AdminFilesUseCase, UploadAdminFileCommand,
};
use crate::modules::content::application::ports::outgoing::{
    AdminFileRepository, AdminFileRepositoryError, StoredFile,
};

pub struct AdminFileService<R>
where
    R: AdminFileRepository,
{
    repository: R,
}

impl<R> AdminFileService<R>
where
    R: AdminFileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Public URL of a slot's current content. The blob id makes every upload
/// a distinct URL so caches never serve the replaced file.
pub fn content_url(file_type: AdminFileType, blob_id: Uuid) -> String {
    format!("/api/files/{}/content?v={}", file_type.as_str(), blob_id)
}

fn map_err(e: AdminFileRepositoryError) -> AdminFileError {
    match e {
        AdminFileRepositoryError::StorageError(msg) => AdminFileError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> AdminFilesUseCase for AdminFileService<R>
where
    R: AdminFileRepository + Send + Sync,
{
    async fn upload(&self, command: UploadAdminFileCommand) -> Result<AdminFile, AdminFileError> {
        let blob_id = Uuid::new_v4();
        let meta = AdminFile {
            blob: BlobRef {
                id: blob_id,
                url: content_url(command.file_type(), blob_id),
            },
            name: command.file_name().to_string(),
            file_type: command.file_type(),
            content_type: command.content_type().to_string(),
            size_bytes: command.content().len() as u64,
            uploaded_at: Utc::now(),
        };

        self.repository
            .put(StoredFile {
                meta: meta.clone(),
                content: command.content().clone(),
            })
            .await
            .map_err(map_err)?;

        info!(
            file_type = %meta.file_type,
            size_bytes = meta.size_bytes,
            "admin file replaced"
        );
        Ok(meta)
    }

    async fn get(&self, file_type: AdminFileType) -> Result<Option<AdminFile>, AdminFileError> {
        let stored = self.repository.get(file_type).await.map_err(map_err)?;
        Ok(stored.map(|f| f.meta))
    }

    async fn content(
        &self,
        file_type: AdminFileType,
    ) -> Result<Option<(AdminFile, Bytes)>, AdminFileError> {
        let stored = self.repository.get(file_type).await.map_err(map_err)?;
        Ok(stored.map(|f| (f.meta, f.content)))
    }
}

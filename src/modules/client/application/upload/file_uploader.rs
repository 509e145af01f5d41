use std::path::Path;
use std::sync::Arc;

use actix_web::web::Bytes;
use tracing::{info, warn};

use crate::modules::client::application::ports::{
    ContentApi, FileUpload, ProgressObserver, RemoteError,
};
use crate::modules::client::application::query::{QueryCache, QueryKey};
use crate::modules::client::application::session::AdminSessionManager;
use crate::modules::client::application::upload::MonotonicProgress;
use crate::modules::content::application::domain::entities::{AdminFile, AdminFileType};
use crate::modules::content::application::domain::policies::{UploadPolicy, UploadValidationError};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Refused before anything was sent.
    #[error(transparent)]
    Validation(#[from] UploadValidationError),

    #[error(transparent)]
    Remote(RemoteError),

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Content type implied by a file name's extension.
pub fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Sends resume and avatar files to their slots.
pub struct FileUploader {
    api: Arc<dyn ContentApi>,
    cache: Arc<QueryCache>,
    session: Arc<AdminSessionManager>,
}

impl FileUploader {
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

    pub async fn upload(
        &self,
        file_type: AdminFileType,
        file_name: &str,
        content_type: &str,
        content: Bytes,
        progress: Option<Arc<dyn ProgressObserver>>,
    ) -> Result<AdminFile, UploadError> {
        UploadPolicy::for_slot(file_type).validate(
            file_name,
            content_type,
            content.len() as u64,
        )?;

        if self.session.token().is_none() {
            return Err(UploadError::Remote(RemoteError::Unauthorized(
                "no admin session".to_string(),
            )));
        }

        let upload = FileUpload {
            file_type,
            file_name: file_name.trim().to_string(),
            content_type: content_type.to_string(),
            content,
        };
        let progress = progress
            .map(|observer| Arc::new(MonotonicProgress::new(observer)) as Arc<dyn ProgressObserver>);

        match self.api.upload_admin_file(upload, progress).await {
            Ok(file) => {
                self.cache.invalidate(QueryKey::for_file(file_type));
                info!(file_type = %file_type, size = file.size_bytes, "File uploaded");
                Ok(file)
            }
            Err(e) => {
                if e.is_unauthorized() {
                    self.session.handle_unauthorized().await;
                } else {
                    warn!(file_type = %file_type, error = %e, "Upload failed");
                }
                Err(UploadError::Remote(e))
            }
        }
    }

    /// Uploads a file from disk. Size and type are checked before the file
    /// is read.
    pub async fn upload_path(
        &self,
        file_type: AdminFileType,
        path: &Path,
        progress: Option<Arc<dyn ProgressObserver>>,
    ) -> Result<AdminFile, UploadError> {
        let io_error = |source| UploadError::Io {
            path: path.display().to_string(),
            source,
        };

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let content_type = guess_content_type(&file_name);

        let size = tokio::fs::metadata(path).await.map_err(io_error)?.len();
        UploadPolicy::for_slot(file_type).validate(&file_name, content_type, size)?;

        let content = tokio::fs::read(path).await.map_err(io_error)?;
        self.upload(
            file_type,
            &file_name,
            content_type,
            Bytes::from(content),
            progress,
        )
        .await
    }
}

use crate::modules::content::application::domain::entities::AdminFileType;

/// Rules a file must satisfy before it may occupy an admin file slot.
/// Shared by the server handler and the client-side pre-upload check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub file_type: AdminFileType,
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadValidationError {
    #[error("file name must not be empty")]
    EmptyFileName,

    #[error("file name exceeds {max} characters")]
    FileNameTooLong { max: usize },

    #[error("file must not be empty")]
    EmptyFile,

    #[error("{file_type} must be one of {allowed:?}, got {actual}")]
    UnsupportedMimeType {
        file_type: AdminFileType,
        allowed: &'static [&'static str],
        actual: String,
    },

    #[error("file is {actual_bytes} bytes, the limit is {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },
}

impl UploadPolicy {
    pub const RESUME_MIME_TYPES: &'static [&'static str] = &["application/pdf"];
    pub const AVATAR_MIME_TYPES: &'static [&'static str] = &["image/png", "image/jpeg", "image/jpg"];

    pub const RESUME_MAX_BYTES: u64 = 10 * 1024 * 1024; // 10MB
    pub const AVATAR_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5MB

    pub fn for_slot(file_type: AdminFileType) -> Self {
        match file_type {
            AdminFileType::Resume => Self {
                file_type,
                max_file_size_bytes: Self::RESUME_MAX_BYTES,
                max_file_name_len: 255,
                allowed_mime_types: Self::RESUME_MIME_TYPES,
            },
            AdminFileType::Avatar => Self {
                file_type,
                max_file_size_bytes: Self::AVATAR_MAX_BYTES,
                max_file_name_len: 255,
                allowed_mime_types: Self::AVATAR_MIME_TYPES,
            },
        }
    }

    /// Largest file any slot accepts; sizes the server's raw body limit.
    pub fn largest_limit() -> u64 {
        Self::RESUME_MAX_BYTES.max(Self::AVATAR_MAX_BYTES)
    }

    pub fn validate(
        &self,
        file_name: &str,
        mime_type: &str,
        file_size_bytes: u64,
    ) -> Result<(), UploadValidationError> {
        let name = file_name.trim();
        if name.is_empty() {
            return Err(UploadValidationError::EmptyFileName);
        }
        if name.chars().count() > self.max_file_name_len {
            return Err(UploadValidationError::FileNameTooLong {
                max: self.max_file_name_len,
            });
        }

        // Parameters such as "; charset=binary" are not part of the type.
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&essence.as_str()) {
            return Err(UploadValidationError::UnsupportedMimeType {
                file_type: self.file_type,
                allowed: self.allowed_mime_types,
                actual: mime_type.to_string(),
            });
        }

        if file_size_bytes == 0 {
            return Err(UploadValidationError::EmptyFile);
        }
        if file_size_bytes > self.max_file_size_bytes {
            return Err(UploadValidationError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: file_size_bytes,
            });
        }

        Ok(())
    }
}

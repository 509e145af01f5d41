mod admin_files;
mod contact_messages;
mod initialize_content;
mod manage_about;
mod manage_records;

pub use admin_files::{AdminFileError, AdminFilesUseCase, UploadAdminFileCommand};
pub use contact_messages::{
    ContactMessageError, ContactMessagesUseCase, ContactSubmission, ContactSubmissionError,
    MAX_CONTACT_FIELD_CHARS,
};
pub use initialize_content::{InitializeContentUseCase, InitializeError};
pub use manage_about::{AboutError, ManageAboutUseCase};
pub use manage_records::{ManageRecordsUseCase, RecordError};

pub mod about_repository;
pub mod admin_file_repository;
pub mod contact_message_repository;
pub mod record_repository;
pub mod seed_state_repository;

pub use about_repository::{AboutRepository, AboutRepositoryError};
pub use admin_file_repository::{AdminFileRepository, AdminFileRepositoryError, StoredFile};
pub use contact_message_repository::{
    ContactMessageRepository, ContactMessageRepositoryError, NewContactMessage,
};
pub use record_repository::{RecordRepository, RecordRepositoryError};
pub use seed_state_repository::{SeedStateError, SeedStateRepository};

mod about_repository_memory;
mod admin_file_repository_memory;
mod contact_message_repository_memory;
mod record_repository_memory;
mod seed_state_memory;

pub use about_repository_memory::InMemoryAboutRepository;
pub use admin_file_repository_memory::InMemoryAdminFileRepository;
pub use contact_message_repository_memory::InMemoryContactMessageRepository;
pub use record_repository_memory::InMemoryRecordRepository;
pub use seed_state_memory::InMemorySeedState;

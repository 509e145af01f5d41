pub mod about_service;
pub mod admin_file_service;
pub mod contact_message_service;
pub mod record_service;
pub mod seed_service;

pub use about_service::AboutService;
pub use admin_file_service::AdminFileService;
pub use contact_message_service::ContactMessageService;
pub use record_service::RecordService;
pub use seed_service::SeedService;

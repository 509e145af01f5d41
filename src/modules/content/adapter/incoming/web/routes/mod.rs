mod about;
mod admin_files;
mod contact_messages;
mod initialize;
mod records;

pub use about::{get_about_handler, update_about_handler};
pub use admin_files::{
    get_avatar_handler, get_file_content_handler, get_resume_handler, upload_admin_file_handler,
};
pub use contact_messages::{
    delete_contact_message_handler, list_contact_messages_handler,
    mark_contact_message_read_handler, submit_contact_message_handler,
};
pub use initialize::initialize_content_handler;
pub use records::{configure_records, RecordRoutes};

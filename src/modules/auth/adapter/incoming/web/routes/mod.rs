mod admin_session;
mod profile;

pub use admin_session::{
    create_session_handler, delete_session_handler, is_admin_handler, validate_session_handler,
};
pub use profile::{get_profile_handler, save_profile_handler};

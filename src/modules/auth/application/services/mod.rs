pub mod admin_session_service;
pub mod profile_service;
pub mod token_hasher;

pub use admin_session_service::{AdminAccount, AdminSessionService};
pub use profile_service::ProfileService;

mod admin_guard;
mod auth_errors;
mod intended_path;
mod session_manager;
mod token_broadcast;

pub use admin_guard::{AdminGuard, GuardDecision};
pub use auth_errors::normalize_admin_auth_error;
pub use intended_path::{IntendedPathStore, DEFAULT_ADMIN_PATH};
pub use session_manager::{AdminSessionManager, LoginError};
pub use token_broadcast::TokenBroadcast;

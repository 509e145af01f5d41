pub mod admin_session_repository;
pub mod password_hasher;
pub mod profile_repository;

pub use admin_session_repository::{
    AdminSessionRepository, AdminSessionRepositoryError, StoredSession,
};
pub use password_hasher::{HashError, PasswordHasher};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};

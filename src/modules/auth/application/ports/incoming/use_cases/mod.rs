mod admin_session;
mod caller_profile;
mod create_admin_session;

pub use admin_session::{LogoutAdminUseCase, SessionError, ValidateAdminSessionUseCase};
pub use caller_profile::{CallerProfileUseCase, ProfileError};
pub use create_admin_session::{
    AdminLoginRequest, AdminLoginRequestError, CreateAdminSessionUseCase, CreateSessionError,
};

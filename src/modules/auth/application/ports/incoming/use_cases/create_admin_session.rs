use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::auth::application::domain::entities::AdminSession;

// ========================= Admin Login Request =========================
/// Validated admin credentials. Only [`AdminLoginRequest::new`] builds one.
#[derive(Clone)]
pub struct AdminLoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminLoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl AdminLoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, AdminLoginRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    /// Lowercased and trimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, AdminLoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(AdminLoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(AdminLoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, AdminLoginRequestError> {
        // Passwords are compared verbatim; only an all-blank one is refused.
        if password.trim().is_empty() {
            return Err(AdminLoginRequestError::EmptyPassword);
        }

        Ok(password)
    }
}

impl std::fmt::Debug for AdminLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminLoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ====================== Create Session Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAdminSessionUseCase: Send + Sync {
    async fn execute(&self, request: AdminLoginRequest) -> Result<AdminSession, CreateSessionError>;
}

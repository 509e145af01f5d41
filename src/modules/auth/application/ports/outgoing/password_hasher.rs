use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash the admin password")]
    Hashing,

    /// The configured admin hash is not a PHC string.
    #[error("Stored admin password hash is malformed")]
    MalformedHash,

    #[error("Admin password verification failed")]
    Verification,

    #[error("Hashing task was cancelled")]
    TaskCancelled,
}

/// Slow password hashing for the single admin account.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// PHC string for `password`, suitable for `ADMIN_PASSWORD_HASH`.
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a mismatch; `Err` only when the hash itself is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

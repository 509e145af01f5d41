use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedStateError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait SeedStateRepository: Send + Sync {
    /// Atomically claims the one-time seed. Returns `true` only for the
    /// first caller; every later call returns `false`.
    async fn claim_seed(&self) -> Result<bool, SeedStateError>;

    /// Gives a claim back after a failed seed so the next call retries.
    async fn release_seed(&self) -> Result<(), SeedStateError>;
}

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitializeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait InitializeContentUseCase: Send + Sync {
    /// Seeds default content once. Returns `true` when this call seeded,
    /// `false` when content was already initialized.
    async fn execute(&self) -> Result<bool, InitializeError>;
}

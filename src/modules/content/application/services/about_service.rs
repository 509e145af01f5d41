use async_trait::async_trait;

use crate::modules::content::application::domain::entities::About;
use crate::modules::content::application::ports::incoming::use_cases::{
    AboutError, ManageAboutUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};

pub struct AboutService<R>
where
    R: AboutRepository,
{
    repository: R,
}

impl<R> AboutService<R>
where
    R: AboutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: AboutRepositoryError) -> AboutError {
    match e {
        AboutRepositoryError::StorageError(msg) => AboutError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> ManageAboutUseCase for AboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn get(&self) -> Result<About, AboutError> {
        self.repository.get().await.map_err(map_err)
    }

    async fn update(&self, content: String) -> Result<About, AboutError> {
        let about = About { content };
        self.repository.set(about.clone()).await.map_err(map_err)?;
        Ok(about)
    }
}

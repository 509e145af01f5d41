use std::sync::Arc;

use crate::modules::client::application::ports::{ContentApi, RecordApi, RemoteError};
use crate::modules::client::application::query::{run_query, QueryCache, QueryKey, RecordKey};
use crate::modules::content::application::domain::entities::{
    About, AdminFile, AdminFileType, Experience, Project, SocialLink, Skill,
};

/// Cached reads behind the public pages.
#[derive(Clone)]
pub struct PortfolioQueries {
    api: Arc<dyn ContentApi>,
    cache: Arc<QueryCache>,
}

impl PortfolioQueries {
    pub fn new(api: Arc<dyn ContentApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn about(&self) -> Result<About, RemoteError> {
        run_query(&self.cache, QueryKey::About, || self.api.get_about()).await
    }

    pub async fn records<R>(&self) -> Result<Vec<R>, RemoteError>
    where
        R: RecordKey,
        dyn ContentApi: RecordApi<R>,
    {
        run_query(&self.cache, R::KEY, || RecordApi::<R>::list(self.api.as_ref())).await
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, RemoteError> {
        self.records::<Skill>().await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, RemoteError> {
        self.records::<Project>().await
    }

    pub async fn experiences(&self) -> Result<Vec<Experience>, RemoteError> {
        self.records::<Experience>().await
    }

    pub async fn social_links(&self) -> Result<Vec<SocialLink>, RemoteError> {
        self.records::<SocialLink>().await
    }

    /// `None` until a resume has been uploaded.
    pub async fn resume(&self) -> Result<Option<AdminFile>, RemoteError> {
        run_query(&self.cache, QueryKey::Resume, || {
            self.api.get_admin_file(AdminFileType::Resume)
        })
        .await
    }

    pub async fn avatar(&self) -> Result<Option<AdminFile>, RemoteError> {
        run_query(&self.cache, QueryKey::Avatar, || {
            self.api.get_admin_file(AdminFileType::Avatar)
        })
        .await
    }

    pub fn is_fetching(&self, key: QueryKey) -> bool {
        self.cache.is_fetching(key)
    }
}

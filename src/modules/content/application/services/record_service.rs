use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::entities::{Record, RecordId};
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageRecordsUseCase, RecordError,
};
use crate::modules::content::application::ports::outgoing::{
    RecordRepository, RecordRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct RecordService<R, Repo>
where
    R: Record,
    Repo: RecordRepository<R>,
{
    repository: Repo,
    _record: PhantomData<fn() -> R>,
}

impl<R, Repo> RecordService<R, Repo>
where
    R: Record,
    Repo: RecordRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }

    fn check(draft: &R::Draft) -> Result<(), RecordError> {
        match R::missing_field(draft) {
            Some(field) => Err(RecordError::MissingField(field)),
            None => Ok(()),
        }
    }
}

fn map_repository_error(e: RecordRepositoryError) -> RecordError {
    match e {
        RecordRepositoryError::NotFound => RecordError::NotFound,
        RecordRepositoryError::StorageError(msg) => RecordError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, Repo> ManageRecordsUseCase<R> for RecordService<R, Repo>
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync,
{
    async fn list(&self) -> Result<Vec<R>, RecordError> {
        self.repository.list().await.map_err(map_repository_error)
    }

    async fn create(&self, draft: R::Draft) -> Result<R, RecordError> {
        Self::check(&draft)?;
        let created = self
            .repository
            .insert(draft)
            .await
            .map_err(map_repository_error)?;

        info!(collection = R::COLLECTION, id = created.id(), "record created");
        Ok(created)
    }

    async fn update(&self, id: RecordId, draft: R::Draft) -> Result<R, RecordError> {
        Self::check(&draft)?;
        self.repository
            .replace(id, draft)
            .await
            .map_err(map_repository_error)
    }

    async fn delete(&self, id: RecordId) -> Result<(), RecordError> {
        self.repository
            .remove(id)
            .await
            .map_err(map_repository_error)?;

        info!(collection = R::COLLECTION, id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::memory::InMemoryRecordRepository;
    use crate::modules::content::application::domain::entities::{
        Project, ProjectDraft, ProjectImage, SocialLink, SocialLinkDraft,
    };

    #[derive(Clone)]
    struct FailingRepo {
        error: RecordRepositoryError,
    }

    #[async_trait]
    impl RecordRepository<SocialLink> for FailingRepo {
        async fn list(&self) -> Result<Vec<SocialLink>, RecordRepositoryError> {
            Err(self.error.clone())
        }

        async fn insert(&self, _draft: SocialLinkDraft) -> Result<SocialLink, RecordRepositoryError> {
            Err(self.error.clone())
        }

        async fn replace(
            &self,
            _id: RecordId,
            _draft: SocialLinkDraft,
        ) -> Result<SocialLink, RecordRepositoryError> {
            Err(self.error.clone())
        }

        async fn remove(&self, _id: RecordId) -> Result<(), RecordRepositoryError> {
            Err(self.error.clone())
        }
    }

    fn project_draft() -> ProjectDraft {
        ProjectDraft {
            title: "X".to_string(),
            description: "Y".to_string(),
            github_url: String::new(),
            live_demo_url: String::new(),
            technologies: vec!["A".to_string(), "B".to_string()],
            image: ProjectImage {
                id: String::new(),
                url: String::new(),
            },
        }
    }

    fn link_draft() -> SocialLinkDraft {
        SocialLinkDraft {
            platform: "GitHub".to_string(),
            url: "https://github.com/ann".to_string(),
        }
    }

    // =====================================================
    // Round trip
    // =====================================================

    #[tokio::test]
    async fn test_create_then_list_yields_submitted_fields_with_new_id() {
        let service = RecordService::new(InMemoryRecordRepository::<Project>::new());

        let created = service.create(project_draft()).await.unwrap();
        let listed = service.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].to_draft(), project_draft());
        assert!(listed[0].id > 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let service = RecordService::new(InMemoryRecordRepository::<SocialLink>::new());
        let created = service.create(link_draft()).await.unwrap();

        let updated = service
            .update(
                created.id,
                SocialLinkDraft {
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/ann".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.platform, "LinkedIn");
        assert_eq!(service.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_record() {
        let service = RecordService::new(InMemoryRecordRepository::<SocialLink>::new());
        let first = service.create(link_draft()).await.unwrap();
        let second = service.create(link_draft()).await.unwrap();

        service.delete(first.id).await.unwrap();

        assert_eq!(service.list().await.unwrap(), vec![second]);
    }

    // =====================================================
    // Validation and error mapping
    // =====================================================

    #[tokio::test]
    async fn test_create_rejects_blank_required_field() {
        let service = RecordService::new(InMemoryRecordRepository::<Project>::new());
        let draft = ProjectDraft {
            title: "   ".to_string(),
            ..project_draft()
        };

        assert_eq!(
            service.create(draft).await.unwrap_err(),
            RecordError::MissingField("title")
        );
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_maps_not_found() {
        let service = RecordService::new(InMemoryRecordRepository::<SocialLink>::new());

        assert_eq!(
            service.update(42, link_draft()).await.unwrap_err(),
            RecordError::NotFound
        );
        assert_eq!(service.delete(42).await.unwrap_err(), RecordError::NotFound);
    }

    #[tokio::test]
    async fn test_storage_error_maps_to_repository_error() {
        let service = RecordService::new(FailingRepo {
            error: RecordRepositoryError::StorageError("disk full".to_string()),
        });

        assert!(matches!(
            service.list().await.unwrap_err(),
            RecordError::RepositoryError(msg) if msg == "disk full"
        ));
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::content::application::domain::entities::{
    About, Project, ProjectDraft, ProjectImage, Skill, SkillCategory, SkillDraft, SocialLink,
    SocialLinkDraft,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    InitializeContentUseCase, InitializeError,
};
use crate::modules::content::application::ports::outgoing::{
    AboutRepository, RecordRepository, SeedStateRepository,
};

const DEFAULT_ABOUT: &str = "I am a software engineer who enjoys building reliable backends \
and clean, fast interfaces. This section can be edited from the admin area.";

pub fn default_skills() -> Vec<SkillDraft> {
    [
        ("Rust", "Advanced", SkillCategory::Backend),
        ("PostgreSQL", "Intermediate", SkillCategory::Backend),
        ("TypeScript", "Advanced", SkillCategory::Frontend),
        ("React", "Intermediate", SkillCategory::Frontend),
        ("Docker", "Intermediate", SkillCategory::DeploymentAndTools),
    ]
    .into_iter()
    .map(|(name, level, category)| SkillDraft {
        name: name.to_string(),
        level: level.to_string(),
        category,
    })
    .collect()
}

pub fn default_project() -> ProjectDraft {
    ProjectDraft {
        title: "Portfolio CMS".to_string(),
        description: "This site: public pages plus a small admin area for its content."
            .to_string(),
        github_url: String::new(),
        live_demo_url: String::new(),
        technologies: vec!["Rust".to_string(), "actix-web".to_string()],
        image: ProjectImage::default(),
    }
}

pub fn default_social_link() -> SocialLinkDraft {
    SocialLinkDraft {
        platform: "GitHub".to_string(),
        url: "https://github.com/".to_string(),
    }
}

/// One-time bootstrap of default content.
pub struct SeedService {
    seed_state: Arc<dyn SeedStateRepository>,
    about: Arc<dyn AboutRepository>,
    skills: Arc<dyn RecordRepository<Skill>>,
    projects: Arc<dyn RecordRepository<Project>>,
    social_links: Arc<dyn RecordRepository<SocialLink>>,
}

impl SeedService {
    pub fn new(
        seed_state: Arc<dyn SeedStateRepository>,
        about: Arc<dyn AboutRepository>,
        skills: Arc<dyn RecordRepository<Skill>>,
        projects: Arc<dyn RecordRepository<Project>>,
        social_links: Arc<dyn RecordRepository<SocialLink>>,
    ) -> Self {
        Self {
            seed_state,
            about,
            skills,
            projects,
            social_links,
        }
    }
}

fn repo_err(e: impl std::fmt::Display) -> InitializeError {
    InitializeError::RepositoryError(e.to_string())
}

impl SeedService {
    /// Each step only fills an empty slot, so a retry after a partial
    /// failure completes the seed without duplicating records.
    async fn seed_defaults(&self) -> Result<(), InitializeError> {
        // Keep an about text the admin wrote before the first seed.
        if self.about.get().await.map_err(repo_err)?.content.is_empty() {
            self.about
                .set(About {
                    content: DEFAULT_ABOUT.to_string(),
                })
                .await
                .map_err(repo_err)?;
        }

        if self.skills.list().await.map_err(repo_err)?.is_empty() {
            for draft in default_skills() {
                self.skills.insert(draft).await.map_err(repo_err)?;
            }
        }
        if self.projects.list().await.map_err(repo_err)?.is_empty() {
            self.projects
                .insert(default_project())
                .await
                .map_err(repo_err)?;
        }
        if self.social_links.list().await.map_err(repo_err)?.is_empty() {
            self.social_links
                .insert(default_social_link())
                .await
                .map_err(repo_err)?;
        }

        Ok(())
    }
}

#[async_trait]
impl InitializeContentUseCase for SeedService {
    async fn execute(&self) -> Result<bool, InitializeError> {
        if !self.seed_state.claim_seed().await.map_err(repo_err)? {
            return Ok(false);
        }

        if let Err(e) = self.seed_defaults().await {
            if let Err(release) = self.seed_state.release_seed().await {
                warn!(error = %release, "Seed claim could not be released");
            }
            return Err(e);
        }

        info!("default content seeded");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::memory::{
        InMemoryAboutRepository, InMemoryRecordRepository, InMemorySeedState,
    };
    use crate::modules::content::application::domain::entities::RecordId;
    use crate::modules::content::application::ports::outgoing::RecordRepositoryError;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Project store whose first insert fails.
    struct FlakyProjects {
        inner: InMemoryRecordRepository<Project>,
        failed: AtomicBool,
    }

    #[async_trait]
    impl RecordRepository<Project> for FlakyProjects {
        async fn list(&self) -> Result<Vec<Project>, RecordRepositoryError> {
            self.inner.list().await
        }

        async fn insert(&self, draft: ProjectDraft) -> Result<Project, RecordRepositoryError> {
            if !self.failed.swap(true, Ordering::SeqCst) {
                return Err(RecordRepositoryError::StorageError("disk full".to_string()));
            }
            self.inner.insert(draft).await
        }

        async fn replace(
            &self,
            id: RecordId,
            draft: ProjectDraft,
        ) -> Result<Project, RecordRepositoryError> {
            self.inner.replace(id, draft).await
        }

        async fn remove(&self, id: RecordId) -> Result<(), RecordRepositoryError> {
            self.inner.remove(id).await
        }
    }

    struct Fixture {
        service: SeedService,
        about: Arc<InMemoryAboutRepository>,
        skills: Arc<InMemoryRecordRepository<Skill>>,
        projects: Arc<InMemoryRecordRepository<Project>>,
        links: Arc<InMemoryRecordRepository<SocialLink>>,
    }

    fn fixture() -> Fixture {
        let about = Arc::new(InMemoryAboutRepository::new());
        let skills = Arc::new(InMemoryRecordRepository::<Skill>::new());
        let projects = Arc::new(InMemoryRecordRepository::<Project>::new());
        let links = Arc::new(InMemoryRecordRepository::<SocialLink>::new());
        let service = SeedService::new(
            Arc::new(InMemorySeedState::new()),
            about.clone(),
            skills.clone(),
            projects.clone(),
            links.clone(),
        );

        Fixture {
            service,
            about,
            skills,
            projects,
            links,
        }
    }

    #[tokio::test]
    async fn test_first_call_seeds_default_content() {
        let f = fixture();

        assert!(f.service.execute().await.unwrap());

        assert_eq!(f.about.get().await.unwrap().content, DEFAULT_ABOUT);
        assert_eq!(f.skills.list().await.unwrap().len(), default_skills().len());
        assert_eq!(f.projects.list().await.unwrap().len(), 1);
        assert_eq!(f.links.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_second_call_changes_nothing() {
        let f = fixture();
        f.service.execute().await.unwrap();
        let skills_once = f.skills.list().await.unwrap();
        let projects_once = f.projects.list().await.unwrap();

        assert!(!f.service.execute().await.unwrap());

        assert_eq!(f.skills.list().await.unwrap(), skills_once);
        assert_eq!(f.projects.list().await.unwrap(), projects_once);
        assert_eq!(f.links.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_existing_about_text_is_kept() {
        let f = fixture();
        f.about
            .set(About {
                content: "Written by hand".to_string(),
            })
            .await
            .unwrap();

        f.service.execute().await.unwrap();

        assert_eq!(f.about.get().await.unwrap().content, "Written by hand");
    }

    #[tokio::test]
    async fn test_failed_seed_is_retried_without_duplicates() {
        let skills = Arc::new(InMemoryRecordRepository::<Skill>::new());
        let projects = Arc::new(FlakyProjects {
            inner: InMemoryRecordRepository::new(),
            failed: AtomicBool::new(false),
        });
        let links = Arc::new(InMemoryRecordRepository::<SocialLink>::new());
        let service = SeedService::new(
            Arc::new(InMemorySeedState::new()),
            Arc::new(InMemoryAboutRepository::new()),
            skills.clone(),
            projects.clone(),
            links.clone(),
        );

        assert!(matches!(
            service.execute().await,
            Err(InitializeError::RepositoryError(_))
        ));
        assert_eq!(skills.list().await.unwrap().len(), default_skills().len());
        assert!(links.list().await.unwrap().is_empty());

        assert!(service.execute().await.unwrap());

        assert_eq!(skills.list().await.unwrap().len(), default_skills().len());
        assert_eq!(projects.list().await.unwrap().len(), 1);
        assert_eq!(links.list().await.unwrap().len(), 1);
        assert!(!service.execute().await.unwrap());
    }
}

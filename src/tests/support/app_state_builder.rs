use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::outgoing::memory::InMemoryProfileRepository;
use crate::modules::auth::application::ports::incoming::use_cases::{
    CallerProfileUseCase, CreateAdminSessionUseCase, LogoutAdminUseCase,
    ValidateAdminSessionUseCase,
};
use crate::modules::auth::application::services::ProfileService;
use crate::modules::auth::application::AuthUseCases;
use crate::modules::content::application::domain::entities::{
    Experience, Project, Skill, SocialLink,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    AdminFilesUseCase, ContactMessagesUseCase, InitializeContentUseCase, ManageAboutUseCase,
    ManageRecordsUseCase,
};
use crate::modules::content::application::ContentUseCases;
use crate::tests::support::stubs::StubAdminSessions;
use crate::{in_memory_content, AppState};

/// Real in-memory content plus stub sessions that accept
/// [`TEST_ADMIN_TOKEN`](crate::tests::support::auth_helper::TEST_ADMIN_TOKEN).
pub struct TestAppStateBuilder {
    content: ContentUseCases,
    auth: AuthUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: in_memory_content(),
            auth: AuthUseCases {
                create_session: Arc::new(StubAdminSessions),
                validate_session: Arc::new(StubAdminSessions),
                logout: Arc::new(StubAdminSessions),
                profile: Arc::new(ProfileService::new(InMemoryProfileRepository::new())),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_session(
        mut self,
        uc: impl CreateAdminSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.create_session = Arc::new(uc);
        self
    }

    pub fn with_validate_session(
        mut self,
        uc: impl ValidateAdminSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.validate_session = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_profile(mut self, uc: impl CallerProfileUseCase + Send + Sync + 'static) -> Self {
        self.auth.profile = Arc::new(uc);
        self
    }

    pub fn with_projects(
        mut self,
        uc: impl ManageRecordsUseCase<Project> + Send + Sync + 'static,
    ) -> Self {
        self.content.projects = Arc::new(uc);
        self
    }

    pub fn with_skills(
        mut self,
        uc: impl ManageRecordsUseCase<Skill> + Send + Sync + 'static,
    ) -> Self {
        self.content.skills = Arc::new(uc);
        self
    }

    pub fn with_experiences(
        mut self,
        uc: impl ManageRecordsUseCase<Experience> + Send + Sync + 'static,
    ) -> Self {
        self.content.experiences = Arc::new(uc);
        self
    }

    pub fn with_social_links(
        mut self,
        uc: impl ManageRecordsUseCase<SocialLink> + Send + Sync + 'static,
    ) -> Self {
        self.content.social_links = Arc::new(uc);
        self
    }

    pub fn with_about(mut self, uc: impl ManageAboutUseCase + Send + Sync + 'static) -> Self {
        self.content.about = Arc::new(uc);
        self
    }

    pub fn with_contact_messages(
        mut self,
        uc: impl ContactMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.contact_messages = Arc::new(uc);
        self
    }

    pub fn with_admin_files(
        mut self,
        uc: impl AdminFilesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.admin_files = Arc::new(uc);
        self
    }

    pub fn with_initialize(
        mut self,
        uc: impl InitializeContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.initialize = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
            auth: self.auth,
        })
    }
}

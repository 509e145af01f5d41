use std::sync::Arc;

use crate::modules::content::application::domain::entities::{
    Experience, Project, Skill, SocialLink,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    AdminFilesUseCase, ContactMessagesUseCase, InitializeContentUseCase, ManageAboutUseCase,
    ManageRecordsUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub projects: Arc<dyn ManageRecordsUseCase<Project> + Send + Sync>,
    pub skills: Arc<dyn ManageRecordsUseCase<Skill> + Send + Sync>,
    pub experiences: Arc<dyn ManageRecordsUseCase<Experience> + Send + Sync>,
    pub social_links: Arc<dyn ManageRecordsUseCase<SocialLink> + Send + Sync>,
    pub about: Arc<dyn ManageAboutUseCase + Send + Sync>,
    pub contact_messages: Arc<dyn ContactMessagesUseCase + Send + Sync>,
    pub admin_files: Arc<dyn AdminFilesUseCase + Send + Sync>,
    pub initialize: Arc<dyn InitializeContentUseCase + Send + Sync>,
}

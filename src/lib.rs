pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::client;
pub use modules::content;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::web;
use chrono::Duration;
use tracing::warn;

use crate::auth::adapter::outgoing::memory::{
    InMemoryAdminSessionRepository, InMemoryProfileRepository,
};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::auth::application::services::{AdminAccount, AdminSessionService, ProfileService};
use crate::auth::application::AuthUseCases;
use crate::config::{AdminPassword, ServerConfig};
use crate::content::adapter::incoming::web::routes as content_routes;
use crate::content::adapter::outgoing::memory::{
    InMemoryAboutRepository, InMemoryAdminFileRepository, InMemoryContactMessageRepository,
    InMemoryRecordRepository, InMemorySeedState,
};
use crate::content::application::domain::entities::{Experience, Project, Skill, SocialLink};
use crate::content::application::services::{
    AboutService, AdminFileService, ContactMessageService, RecordService, SeedService,
};
use crate::content::application::ContentUseCases;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub auth: AuthUseCases,
}

/// In-memory content wired to its services. Seeding shares the same
/// repositories as the record services.
pub fn in_memory_content() -> ContentUseCases {
    let about = InMemoryAboutRepository::new();
    let projects = InMemoryRecordRepository::<Project>::new();
    let skills = InMemoryRecordRepository::<Skill>::new();
    let experiences = InMemoryRecordRepository::<Experience>::new();
    let social_links = InMemoryRecordRepository::<SocialLink>::new();

    let seed = SeedService::new(
        Arc::new(InMemorySeedState::new()),
        Arc::new(about.clone()),
        Arc::new(skills.clone()),
        Arc::new(projects.clone()),
        Arc::new(social_links.clone()),
    );

    ContentUseCases {
        projects: Arc::new(RecordService::new(projects)),
        skills: Arc::new(RecordService::new(skills)),
        experiences: Arc::new(RecordService::new(experiences)),
        social_links: Arc::new(RecordService::new(social_links)),
        about: Arc::new(AboutService::new(about)),
        contact_messages: Arc::new(ContactMessageService::new(
            InMemoryContactMessageRepository::new(),
        )),
        admin_files: Arc::new(AdminFileService::new(InMemoryAdminFileRepository::new())),
        initialize: Arc::new(seed),
    }
}

/// Build the full application state from configuration.
pub async fn build_state(
    config: &ServerConfig,
    hasher: Arc<dyn PasswordHasher>,
) -> Result<AppState, HashError> {
    let password_hash = match &config.admin_password {
        AdminPassword::Hash(hash) => hash.clone(),
        AdminPassword::Plain(plain) => {
            warn!("ADMIN_PASSWORD is set in plain text; use ADMIN_PASSWORD_HASH outside development");
            hasher.hash_password(plain).await?
        }
    };

    let account = AdminAccount::new(
        &config.admin_email,
        password_hash,
        &config.admin_principal,
    );

    let sessions = Arc::new(AdminSessionService::new(
        InMemoryAdminSessionRepository::new(),
        hasher,
        account,
        Duration::seconds(config.session_ttl_secs),
    ));

    let auth = AuthUseCases {
        create_session: sessions.clone(),
        validate_session: sessions.clone(),
        logout: sessions,
        profile: Arc::new(ProfileService::new(InMemoryProfileRepository::new())),
    };

    Ok(AppState {
        content: in_memory_content(),
        auth,
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;

    cfg.service(crate::health::health);

    cfg.service(auth_routes::create_session_handler);
    cfg.service(auth_routes::validate_session_handler);
    cfg.service(auth_routes::delete_session_handler);
    cfg.service(auth_routes::is_admin_handler);
    cfg.service(auth_routes::get_profile_handler);
    cfg.service(auth_routes::save_profile_handler);

    cfg.service(content_routes::get_about_handler);
    cfg.service(content_routes::update_about_handler);
    cfg.configure(content_routes::configure_records::<Project>);
    cfg.configure(content_routes::configure_records::<Skill>);
    cfg.configure(content_routes::configure_records::<Experience>);
    cfg.configure(content_routes::configure_records::<SocialLink>);
    cfg.service(content_routes::submit_contact_message_handler);
    cfg.service(content_routes::list_contact_messages_handler);
    cfg.service(content_routes::mark_contact_message_read_handler);
    cfg.service(content_routes::delete_contact_message_handler);
    cfg.service(content_routes::get_resume_handler);
    cfg.service(content_routes::get_avatar_handler);
    cfg.service(content_routes::get_file_content_handler);
    cfg.service(content_routes::upload_admin_file_handler);
    cfg.service(content_routes::initialize_content_handler);
}

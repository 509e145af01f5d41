use std::fmt;

use crate::modules::content::application::domain::entities::{
    AdminFileType, Experience, Project, Record, SocialLink, Skill,
};

/// One cache entry per remote collection or singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    About,
    Skills,
    Projects,
    Experiences,
    SocialLinks,
    Resume,
    Avatar,
    ContactMessages,
    CurrentUserProfile,
}

impl QueryKey {
    pub const ALL: [QueryKey; 9] = [
        QueryKey::About,
        QueryKey::Skills,
        QueryKey::Projects,
        QueryKey::Experiences,
        QueryKey::SocialLinks,
        QueryKey::Resume,
        QueryKey::Avatar,
        QueryKey::ContactMessages,
        QueryKey::CurrentUserProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::About => "about",
            QueryKey::Skills => "skills",
            QueryKey::Projects => "projects",
            QueryKey::Experiences => "experiences",
            QueryKey::SocialLinks => "socialLinks",
            QueryKey::Resume => "resume",
            QueryKey::Avatar => "avatar",
            QueryKey::ContactMessages => "contactMessages",
            QueryKey::CurrentUserProfile => "currentUserProfile",
        }
    }

    pub fn for_file(file_type: AdminFileType) -> Self {
        match file_type {
            AdminFileType::Resume => QueryKey::Resume,
            AdminFileType::Avatar => QueryKey::Avatar,
        }
    }

    /// Entries that only make sense while an admin is signed in.
    pub fn is_admin_only(&self) -> bool {
        matches!(self, QueryKey::ContactMessages | QueryKey::CurrentUserProfile)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key of a record collection.
pub trait RecordKey: Record {
    const KEY: QueryKey;
    /// Singular noun used in user notices.
    const LABEL: &'static str;
}

impl RecordKey for Project {
    const LABEL: &'static str = "project";
    const KEY: QueryKey = QueryKey::Projects;
}

impl RecordKey for Skill {
    const LABEL: &'static str = "skill";
    const KEY: QueryKey = QueryKey::Skills;
}

impl RecordKey for Experience {
    const LABEL: &'static str = "experience";
    const KEY: QueryKey = QueryKey::Experiences;
}

impl RecordKey for SocialLink {
    const LABEL: &'static str = "social link";
    const KEY: QueryKey = QueryKey::SocialLinks;
}

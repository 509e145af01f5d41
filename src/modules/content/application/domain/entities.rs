use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

pub type RecordId = u64;

//
// ──────────────────────────────────────────────────────────
// Record contract
// ──────────────────────────────────────────────────────────
//

/// A flat, id-keyed portfolio record. Every writable collection is a set of
/// these; the draft is the record without its server-assigned id.
pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Collection name, also the URL segment under `/api` and `/api/admin`.
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
    fn to_draft(&self) -> Self::Draft;

    /// Names the first required field left blank, if any.
    fn missing_field(draft: &Self::Draft) -> Option<&'static str>;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub live_demo_url: String,
    /// Display order.
    pub technologies: Vec<String>,
    pub image: ProjectImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub live_demo_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: ProjectImage,
}

impl Record for Project {
    type Draft = ProjectDraft;
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, d: ProjectDraft) -> Self {
        Self {
            id,
            title: d.title,
            description: d.description,
            github_url: d.github_url,
            live_demo_url: d.live_demo_url,
            technologies: d.technologies,
            image: d.image,
        }
    }

    fn missing_field(d: &ProjectDraft) -> Option<&'static str> {
        blank(&d.title).then_some("title")
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            github_url: self.github_url.clone(),
            live_demo_url: self.live_demo_url.clone(),
            technologies: self.technologies.clone(),
            image: self.image.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Backend Skills")]
    Backend,
    #[serde(rename = "Frontend Skills")]
    Frontend,
    #[serde(rename = "Deployment & Tools")]
    DeploymentAndTools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Backend,
        SkillCategory::Frontend,
        SkillCategory::DeploymentAndTools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Backend => "Backend Skills",
            SkillCategory::Frontend => "Frontend Skills",
            SkillCategory::DeploymentAndTools => "Deployment & Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier labels offered by the admin form. `Skill::level` stays free text.
pub const SKILL_LEVELS: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "Expert"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    pub level: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub level: String,
    pub category: SkillCategory,
}

impl Record for Skill {
    type Draft = SkillDraft;
    const COLLECTION: &'static str = "skills";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, d: SkillDraft) -> Self {
        Self {
            id,
            name: d.name,
            level: d.level,
            category: d.category,
        }
    }

    fn missing_field(d: &SkillDraft) -> Option<&'static str> {
        if blank(&d.name) {
            Some("name")
        } else if blank(&d.level) {
            Some("level")
        } else {
            None
        }
    }

    fn to_draft(&self) -> SkillDraft {
        SkillDraft {
            name: self.name.clone(),
            level: self.level.clone(),
            category: self.category,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

/// Dates are free text ("Jan 2021", "Present"); nothing parses or orders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: RecordId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl Record for Experience {
    type Draft = ExperienceDraft;
    const COLLECTION: &'static str = "experiences";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, d: ExperienceDraft) -> Self {
        Self {
            id,
            title: d.title,
            company: d.company,
            location: d.location,
            start_date: d.start_date,
            end_date: d.end_date,
            description: d.description,
        }
    }

    fn missing_field(d: &ExperienceDraft) -> Option<&'static str> {
        if blank(&d.title) {
            Some("title")
        } else if blank(&d.company) {
            Some("company")
        } else {
            None
        }
    }

    fn to_draft(&self) -> ExperienceDraft {
        ExperienceDraft {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            description: self.description.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// SocialLink
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: RecordId,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkDraft {
    pub platform: String,
    pub url: String,
}

impl Record for SocialLink {
    type Draft = SocialLinkDraft;
    const COLLECTION: &'static str = "social-links";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, d: SocialLinkDraft) -> Self {
        Self {
            id,
            platform: d.platform,
            url: d.url,
        }
    }

    fn missing_field(d: &SocialLinkDraft) -> Option<&'static str> {
        if blank(&d.platform) {
            Some("platform")
        } else if blank(&d.url) {
            Some("url")
        } else {
            None
        }
    }

    fn to_draft(&self) -> SocialLinkDraft {
        SocialLinkDraft {
            platform: self.platform.clone(),
            url: self.url.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Singletons, inbox and files
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Only ever goes false -> true.
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminFileType {
    Resume,
    Avatar,
}

impl AdminFileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminFileType::Resume => "resume",
            AdminFileType::Avatar => "avatar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "resume" => Some(AdminFileType::Resume),
            "avatar" => Some(AdminFileType::Avatar),
            _ => None,
        }
    }
}

impl fmt::Display for AdminFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRef {
    pub id: Uuid,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminFile {
    pub blob: BlobRef,
    pub name: String,
    pub file_type: AdminFileType,
    pub content_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

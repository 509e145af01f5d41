use crate::modules::content::application::domain::entities::{
    ProjectDraft, ProjectImage, SkillCategory, SkillDraft,
};

pub fn sample_project_draft() -> ProjectDraft {
    ProjectDraft {
        title: "Ledger".to_string(),
        description: "Double-entry bookkeeping for small teams".to_string(),
        github_url: "https://github.com/example/ledger".to_string(),
        live_demo_url: String::new(),
        technologies: vec!["Rust".to_string(), "SQLite".to_string()],
        image: ProjectImage::default(),
    }
}

pub fn sample_skill_draft() -> SkillDraft {
    SkillDraft {
        name: "Rust".to_string(),
        level: "Advanced".to_string(),
        category: SkillCategory::Backend,
    }
}

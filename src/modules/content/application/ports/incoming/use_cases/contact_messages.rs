use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};

use crate::modules::content::application::domain::entities::{ContactMessage, RecordId};

pub const MAX_CONTACT_FIELD_CHARS: usize = 5000;

// ========================= Submission =========================
/// A validated contact form submission.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactSubmissionError {
    #[error("Name is required")]
    EmptyName,
    #[error("Email is required")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Message is required")]
    EmptyMessage,
    #[error("`{0}` is too long")]
    TooLong(&'static str),
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactSubmissionError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ContactSubmissionError::EmptyName);
        }
        if email.is_empty() {
            return Err(ContactSubmissionError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(ContactSubmissionError::InvalidEmailFormat);
        }
        if message.is_empty() {
            return Err(ContactSubmissionError::EmptyMessage);
        }
        for (field, value) in [("name", name), ("email", email), ("message", message)] {
            if value.chars().count() > MAX_CONTACT_FIELD_CHARS {
                return Err(ContactSubmissionError::TooLong(field));
            }
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<'de> Deserialize<'de> for ContactSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ContactSubmissionHelper {
            name: String,
            email: String,
            message: String,
        }

        let helper = ContactSubmissionHelper::deserialize(deserializer)?;
        ContactSubmission::new(&helper.name, &helper.email, &helper.message)
            .map_err(serde::de::Error::custom)
    }
}

// ========================= Use case =========================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ContactMessagesUseCase: Send + Sync {
    /// Public: stores the submission unread with a server timestamp.
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactMessageError>;

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageError>;
    async fn mark_read(&self, id: RecordId) -> Result<(), ContactMessageError>;
    async fn delete(&self, id: RecordId) -> Result<(), ContactMessageError>;
}

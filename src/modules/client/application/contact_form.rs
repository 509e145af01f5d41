use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::client::application::ports::{ContentApi, RemoteError};
use crate::modules::client::application::query::{QueryCache, QueryKey};
use crate::modules::content::application::domain::entities::ContactMessage;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContactSubmission, ContactSubmissionError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error(transparent)]
    Invalid(#[from] ContactSubmissionError),

    #[error("Failed to send message: {0}")]
    Remote(RemoteError),
}

/// The public "get in touch" form.
pub struct ContactForm {
    api: Arc<dyn ContentApi>,
    cache: Arc<QueryCache>,
}

impl ContactForm {
    pub fn new(api: Arc<dyn ContentApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, ContactFormError> {
        let submission = ContactSubmission::new(name, email, message)?;

        let stored = self
            .api
            .submit_contact_message(submission.name(), submission.email(), submission.message())
            .await
            .map_err(|e| {
                warn!(error = %e, "Contact message not delivered");
                ContactFormError::Remote(e)
            })?;

        // An admin viewing the inbox should see the new message.
        self.cache.invalidate(QueryKey::ContactMessages);
        info!(id = stored.id, "Contact message sent");
        Ok(stored)
    }
}

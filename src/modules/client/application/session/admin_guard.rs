use std::sync::Arc;

use crate::modules::client::application::session::{
    AdminSessionManager, IntendedPathStore, LoginError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    ShowLogin,
}

/// Gate in front of every admin page.
pub struct AdminGuard {
    session: Arc<AdminSessionManager>,
    intended: IntendedPathStore,
}

impl AdminGuard {
    pub fn new(session: Arc<AdminSessionManager>, intended: IntendedPathStore) -> Self {
        Self { session, intended }
    }

    /// Decides what to show for `path`. A refused visit remembers the path
    /// so a later login can return to it.
    pub async fn check(&self, path: &str) -> GuardDecision {
        if self.session.is_authenticated().await {
            self.intended.clear();
            GuardDecision::Render
        } else {
            self.intended.remember(path);
            GuardDecision::ShowLogin
        }
    }

    /// Signs in from the login screen and returns where to go next.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, LoginError> {
        self.session.login(email, password).await?;

        let target = self.intended.get();
        self.intended.clear();
        Ok(target)
    }
}

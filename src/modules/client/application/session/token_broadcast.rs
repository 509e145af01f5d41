use std::sync::Arc;

use tokio::sync::watch;

use crate::modules::auth::application::domain::entities::SessionToken;

/// Process-wide cell holding the current admin token.
///
/// Clones share the same cell, so every holder sees a change as soon as it
/// is published.
#[derive(Clone)]
pub struct TokenBroadcast {
    sender: Arc<watch::Sender<Option<SessionToken>>>,
}

impl TokenBroadcast {
    pub fn new(initial: Option<SessionToken>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Option<SessionToken> {
        self.sender.borrow().clone()
    }

    pub fn publish(&self, token: Option<SessionToken>) {
        self.sender.send_replace(token);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SessionToken>> {
        self.sender.subscribe()
    }
}

impl Default for TokenBroadcast {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_observe_publish_from_any_clone() {
        let broadcast = TokenBroadcast::default();
        let other = broadcast.clone();
        let mut rx = broadcast.subscribe();

        other.publish(Some(SessionToken::new("t-1")));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|t| t.as_str()), Some("t-1"));
        assert_eq!(broadcast.current(), Some(SessionToken::new("t-1")));
    }

    #[test]
    fn test_publish_without_subscribers_still_updates() {
        let broadcast = TokenBroadcast::new(Some(SessionToken::new("old")));

        broadcast.publish(None);

        assert_eq!(broadcast.current(), None);
    }
}

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifetime of the view that asked for some data.
///
/// A read started inside a scope still runs to completion (and still fills
/// the cache) after the scope is closed; only the hand-off to the view is
/// skipped.
#[derive(Clone)]
pub struct ViewScope {
    mounted: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    /// `None` when the view went away before `fut` resolved.
    pub async fn deliver<F, T>(&self, fut: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let value = fut.await;
        self.is_mounted().then_some(value)
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

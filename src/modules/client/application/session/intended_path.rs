use std::sync::{Arc, Mutex};

pub const DEFAULT_ADMIN_PATH: &str = "/admin";

/// Remembers which admin page a signed-out visitor asked for, so login can
/// send them back there. Lives only as long as the process.
#[derive(Clone, Default)]
pub struct IntendedPathStore {
    path: Arc<Mutex<Option<String>>>,
}

impl IntendedPathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only admin paths are remembered.
    pub fn remember(&self, path: &str) {
        if !path.starts_with(DEFAULT_ADMIN_PATH) {
            return;
        }
        *self.lock() = Some(path.to_string());
    }

    pub fn get(&self) -> String {
        self.lock()
            .clone()
            .unwrap_or_else(|| DEFAULT_ADMIN_PATH.to_string())
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.path.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

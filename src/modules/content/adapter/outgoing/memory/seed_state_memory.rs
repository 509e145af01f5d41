use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::{SeedStateError, SeedStateRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemorySeedState {
    seeded: Arc<AtomicBool>,
}

impl InMemorySeedState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeedStateRepository for InMemorySeedState {
    async fn claim_seed(&self) -> Result<bool, SeedStateError> {
        Ok(!self.seeded.swap(true, Ordering::SeqCst))
    }

    async fn release_seed(&self) -> Result<(), SeedStateError> {
        self.seeded.store(false, Ordering::SeqCst);
        Ok(())
    }
}

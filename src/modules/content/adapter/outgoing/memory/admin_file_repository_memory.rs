use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::content::application::domain::entities::AdminFileType;
use crate::modules::content::application::ports::outgoing::{
    AdminFileRepository, AdminFileRepositoryError, StoredFile,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminFileRepository {
    slots: Arc<RwLock<HashMap<AdminFileType, StoredFile>>>,
}

impl InMemoryAdminFileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminFileRepository for InMemoryAdminFileRepository {
    async fn put(&self, file: StoredFile) -> Result<(), AdminFileRepositoryError> {
        self.slots.write().await.insert(file.meta.file_type, file);
        Ok(())
    }

    async fn get(
        &self,
        file_type: AdminFileType,
    ) -> Result<Option<StoredFile>, AdminFileRepositoryError> {
        Ok(self.slots.read().await.get(&file_type).cloned())
    }
}

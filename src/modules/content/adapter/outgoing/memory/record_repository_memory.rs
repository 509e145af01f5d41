use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::content::application::domain::entities::{Record, RecordId};
use crate::modules::content::application::ports::outgoing::{
    RecordRepository, RecordRepositoryError,
};

#[derive(Debug)]
struct Table<R> {
    rows: BTreeMap<RecordId, R>,
    next_id: RecordId,
}

/// Process-local record table. Clones share the same rows.
#[derive(Debug)]
pub struct InMemoryRecordRepository<R> {
    table: Arc<RwLock<Table<R>>>,
}

impl<R> Clone for InMemoryRecordRepository<R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<R> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl<R> InMemoryRecordRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    async fn list(&self) -> Result<Vec<R>, RecordRepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, RecordRepositoryError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| RecordRepositoryError::StorageError("id space exhausted".to_string()))?;

        let record = R::from_draft(id, draft);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: RecordId, draft: R::Draft) -> Result<R, RecordRepositoryError> {
        let mut table = self.table.write().await;
        let slot = table
            .rows
            .get_mut(&id)
            .ok_or(RecordRepositoryError::NotFound)?;

        *slot = R::from_draft(id, draft);
        Ok(slot.clone())
    }

    async fn remove(&self, id: RecordId) -> Result<(), RecordRepositoryError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RecordRepositoryError::NotFound)
    }
}

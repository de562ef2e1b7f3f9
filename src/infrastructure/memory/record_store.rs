use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::record::{CreateAck, DeleteOutcome, Record, RecordId, RecordStore, StoreError};

/// Process-local record store with the same contract as the document store.
/// Records are kept in insertion order.
#[derive(Clone)]
pub struct InMemoryRecordStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self { records: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T: Record> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {

    async fn create(&self, record: &T) -> Result<CreateAck, StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::Conflict(format!(
                "{} with id {} already exists",
                T::KIND,
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(CreateAck { id: record.id().clone() })
    }

    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome, StoreError> {
        let mut records = self.records.write().await;
        // partition key and id are the same value, so matching on id is enough
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                Ok(DeleteOutcome::Deleted)
            }
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}

/// Store that fails every call with the given error.
#[cfg(test)]
pub(crate) struct FailingRecordStore {
    pub error: StoreError,
}

#[cfg(test)]
#[async_trait]
impl<T: Record> RecordStore<T> for FailingRecordStore {
    async fn create(&self, _record: &T) -> Result<CreateAck, StoreError> {
        Err(self.error.clone())
    }

    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: &RecordId) -> Result<DeleteOutcome, StoreError> {
        Err(self.error.clone())
    }
}

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{doc, from_document, to_document, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::domain::record::{CreateAck, DeleteOutcome, Record, RecordId, RecordStore, StoreError};
use crate::infrastructure::database::mongo_context::MongoContext;

const DUPLICATE_KEY: i32 = 11000;
// Cosmos DB reports throttling (HTTP 429) through this code.
const REQUEST_RATE_TOO_LARGE: i32 = 16500;

/// Field holding the identifier in every stored document. It is also the
/// shard (partition) key of the collection.
pub const ID_FIELD: &str = "id";

/// Sorts a driver error into the store error taxonomy.
pub fn classify_error(error: &MongoError) -> StoreError {
    let detail = error.to_string();
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) => match write.code {
            DUPLICATE_KEY => StoreError::Conflict(detail),
            REQUEST_RATE_TOO_LARGE => StoreError::Unavailable(detail),
            _ => StoreError::Unknown(detail),
        },
        ErrorKind::Command(command) => match command.code {
            DUPLICATE_KEY => StoreError::Conflict(detail),
            REQUEST_RATE_TOO_LARGE => StoreError::Unavailable(detail),
            _ => StoreError::Unknown(detail),
        },
        ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Unavailable(detail),
        _ => StoreError::Unknown(detail),
    }
}

/// One collection of `T` records.
pub struct MongoRecordStore<T> {
    records: Collection<Document>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MongoRecordStore<T> {
    pub fn new(context: &MongoContext, collection_name: &str) -> Self {
        Self {
            records: context.collection(collection_name),
            _record: PhantomData,
        }
    }

    pub fn collection_name(&self) -> &str {
        self.records.name()
    }

    /// Unique index on the identifier so a duplicate insert surfaces as a conflict.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { ID_FIELD: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.records
            .create_index(index)
            .await
            .map(|_| ())
            .map_err(|e| classify_error(&e))
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MongoRecordStore<T> {
    async fn create(&self, record: &T) -> Result<CreateAck, StoreError> {
        let document = to_document(record).map_err(|e| StoreError::Unknown(e.to_string()))?;

        self.records
            .insert_one(document)
            .await
            .map_err(|e| classify_error(&e))?;

        Ok(CreateAck { id: record.id().clone() })
    }

    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        let mut cursor = self
            .records
            .find(doc! {})
            .await
            .map_err(|e| classify_error(&e))?;
        let mut records = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(document) => match from_document::<T>(document) {
                    Ok(record) => records.push(record),
                    Err(e) => log::warn!(
                        "Skipping unreadable {} document in '{}': {}",
                        T::KIND,
                        self.records.name(),
                        e
                    ),
                },
                Err(e) => return Err(classify_error(&e)),
            }
        }

        Ok(records)
    }

    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome, StoreError> {
        let result = self
            .records
            .delete_one(doc! { ID_FIELD: id.as_str() })
            .await
            .map_err(|e| classify_error(&e))?;

        if result.deleted_count == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

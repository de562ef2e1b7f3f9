pub mod identity;
pub mod repository;
pub mod validation;

use serde::{de::DeserializeOwned, Serialize};

pub use identity::RecordId;
pub use repository::{CreateAck, DeleteOutcome, RecordStore, StoreError};
pub use validation::{Rule, Violation, Violations};

/// A persisted record type (pet or walker).
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Human readable kind, used in log lines and messages.
    const KIND: &'static str;

    fn id(&self) -> &RecordId;

    /// Always the record's own identifier.
    fn partition_key(&self) -> &RecordId {
        self.id()
    }
}

/// Field values that passed validation but have no identity yet.
pub trait Draft {
    type Record: Record;

    fn with_id(self, id: RecordId) -> Self::Record;
}

/// Raw submitted field values.
pub trait RecordForm {
    type Draft: Draft;

    /// Checks every field independently and reports all violations at once.
    fn validate(&self) -> Result<Self::Draft, Violations>;
}

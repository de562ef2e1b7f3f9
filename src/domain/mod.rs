pub mod pet;
pub mod record;
pub mod walker;

pub use pet::model::{Pet, PetForm};
pub use record::{Record, RecordForm, RecordId, RecordStore, StoreError};
pub use walker::model::{Walker, WalkerForm};

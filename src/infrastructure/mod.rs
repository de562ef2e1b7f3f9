pub mod database;
pub mod memory;
pub mod mongodb;

pub use self::database::mongo_context;
pub use self::memory::record_store;
pub use self::mongodb::record_repository;

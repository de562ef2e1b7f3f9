pub mod record_repository;

use std::sync::Arc;

use crate::domain::{Pet, RecordStore, Walker};

/// Persistence capabilities shared by every handler for the life of the server.
#[derive(Clone)]
pub struct AppState {
    pub pets: Arc<dyn RecordStore<Pet>>,
    pub walkers: Arc<dyn RecordStore<Walker>>,
}

impl AppState {
    pub fn new(pets: Arc<dyn RecordStore<Pet>>, walkers: Arc<dyn RecordStore<Walker>>) -> Self {
        Self { pets, walkers }
    }
}

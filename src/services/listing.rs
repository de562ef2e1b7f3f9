use crate::api::state::AppState;
use crate::domain::record::{DeleteOutcome, Record, RecordId, RecordStore, StoreError};
use crate::domain::{Pet, Walker};

/// Everything shown on the listing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub walkers: Vec<Walker>,
    pub pets: Vec<Pet>,
}

/// Scans both containers. Run this before rendering; nothing is fetched
/// while building the state.
pub async fn load_listing(state: &AppState) -> Result<Listing, StoreError> {
    let (walkers, pets) = futures::try_join!(state.walkers.list_all(), state.pets.list_all())?;
    Ok(Listing { walkers, pets })
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemovalOutcome {
    /// No identifier was submitted; nothing was attempted.
    Skipped,
    Removed,
    NotFound,
    Failed(StoreError),
}

#[derive(Debug)]
pub struct RemovalReport {
    pub outcome: RemovalOutcome,
    /// Fresh listing fetched after the delete attempt. `None` when skipped.
    pub listing: Option<Result<Listing, StoreError>>,
}

async fn remove<T: Record>(store: &dyn RecordStore<T>, id: &RecordId) -> RemovalOutcome {
    match store.delete(id).await {
        Ok(DeleteOutcome::Deleted) => {
            log::info!("{} with ID {} removed successfully.", T::KIND, id);
            RemovalOutcome::Removed
        }
        Ok(DeleteOutcome::NotFound) => {
            log::warn!("{} with ID {} not found.", T::KIND, id);
            RemovalOutcome::NotFound
        }
        Err(e) => {
            log::error!("An error occurred while removing {} with ID {}: {}", T::KIND, id, e);
            RemovalOutcome::Failed(e)
        }
    }
}

async fn remove_and_refresh<T: Record>(
    state: &AppState,
    store: &dyn RecordStore<T>,
    id: RecordId,
) -> RemovalReport {
    if id.is_empty() {
        return RemovalReport { outcome: RemovalOutcome::Skipped, listing: None };
    }

    let outcome = remove(store, &id).await;
    let listing = load_listing(state).await;
    if let Err(e) = &listing {
        log::error!("Failed to refresh listing after removing {} {}: {}", T::KIND, id, e);
    }

    RemovalReport { outcome, listing: Some(listing) }
}

pub async fn remove_pet(state: &AppState, id: RecordId) -> RemovalReport {
    remove_and_refresh(state, state.pets.as_ref(), id).await
}

pub async fn remove_walker(state: &AppState, id: RecordId) -> RemovalReport {
    remove_and_refresh(state, state.walkers.as_ref(), id).await
}

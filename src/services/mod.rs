pub mod listing;
pub mod submission;

pub use listing::{load_listing, remove_pet, remove_walker, Listing, RemovalOutcome, RemovalReport};
pub use submission::{submit, SubmissionOutcome};

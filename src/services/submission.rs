use crate::domain::record::{
    Draft, Record, RecordForm, RecordId, RecordStore, StoreError, Violations,
};

/// Record type produced by a form.
pub type RecordOf<F> = <<F as RecordForm>::Draft as Draft>::Record;

/// Where a form submission ended up.
#[derive(Debug)]
pub enum SubmissionOutcome<R> {
    /// Stored; the caller should navigate back to the listing.
    Succeeded(R),
    /// At least one field was invalid. Nothing was sent to the store.
    Rejected(Violations),
    /// The store refused or could not be reached. Not retried.
    Failed(StoreError),
}

/// Validates the form, assigns a fresh identity and creates the record.
pub async fn submit<F, S>(store: &S, form: &F) -> SubmissionOutcome<RecordOf<F>>
where
    F: RecordForm,
    S: RecordStore<RecordOf<F>> + ?Sized,
{
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(violations) => {
            log::info!(
                "{} submission rejected with {} violation(s)",
                <RecordOf<F> as Record>::KIND,
                violations.len()
            );
            return SubmissionOutcome::Rejected(violations);
        }
    };

    let record = draft.with_id(RecordId::generate());

    log::info!(
        "Attempting to write {} {} to the database",
        <RecordOf<F> as Record>::KIND,
        record.id()
    );
    match store.create(&record).await {
        Ok(ack) => {
            log::info!("Successfully wrote {} {}", <RecordOf<F> as Record>::KIND, ack.id);
            SubmissionOutcome::Succeeded(record)
        }
        Err(e) => {
            log::error!("Failed to write {} {}: {}", <RecordOf<F> as Record>::KIND, record.id(), e);
            SubmissionOutcome::Failed(e)
        }
    }
}

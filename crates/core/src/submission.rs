//! Validated submission: trim → required check → format checks → persist.
//!
//! The pipeline owns no form state and keeps nothing between calls. Clearing
//! the form after [`SubmissionResult::Persisted`] is the caller's job.

use crate::customer::{CustomerFields, CustomerRecord};
use crate::error::{StoreError, ValidationFailure};
use crate::store::CustomerStore;
use crate::validation::{is_valid_date, is_valid_email};

/// Outcome of one submission attempt.
#[derive(Debug)]
pub enum SubmissionResult {
    /// The record was written.
    Persisted,
    /// The input was rejected; nothing was written.
    ValidationFailed(ValidationFailure),
    /// The store could not write the record.
    PersistenceFailed(StoreError),
}

/// Trim and check `fields`, stopping at the first failure.
///
/// Order: name present, then email shape (if given), then birthday shape
/// (if given).
pub fn validate(fields: &CustomerFields) -> Result<CustomerRecord, ValidationFailure> {
    let fields = fields.trimmed();

    if fields.name.is_empty() {
        return Err(ValidationFailure::NameRequired);
    }
    if !fields.email.is_empty() && !is_valid_email(&fields.email) {
        return Err(ValidationFailure::EmailInvalid);
    }
    if !fields.birthday.is_empty() && !is_valid_date(&fields.birthday) {
        return Err(ValidationFailure::DateInvalid);
    }

    Ok(CustomerRecord::from_trimmed(fields))
}

/// Validate `fields` and, if they pass, insert the record into `store`.
pub async fn submit<S: CustomerStore>(store: &S, fields: &CustomerFields) -> SubmissionResult {
    let record = match validate(fields) {
        Ok(record) => record,
        Err(failure) => {
            tracing::info!(code = failure.code(), "Customer submission rejected");
            return SubmissionResult::ValidationFailed(failure);
        }
    };

    match store.insert(&record).await {
        Ok(()) => {
            tracing::info!(contact_method = %record.contact_method, "Customer submission persisted");
            SubmissionResult::Persisted
        }
        Err(err) => {
            tracing::error!(error = %err, "Customer submission could not be saved");
            SubmissionResult::PersistenceFailed(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Persistence contract used by the submission pipeline.
//!
//! Implemented by `intake-db` for SQLite; tests supply in-memory fakes.

use std::future::Future;

use crate::customer::CustomerRecord;
use crate::error::StoreError;

/// Write-only boundary for customer records.
pub trait CustomerStore: Send + Sync {
    /// Persist `record` as one atomic insert.
    ///
    /// The assigned identity is not returned. Any storage failure comes back
    /// as a [`StoreError`], never as a panic.
    fn insert(
        &self,
        record: &CustomerRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

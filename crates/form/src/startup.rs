//! Store preparation run once before the form opens.

use intake_core::error::StoreError;
use intake_db::SqliteCustomerStore;

/// Check the database answers, then make sure the `customers` table exists.
pub async fn prepare_store(store: &SqliteCustomerStore) -> Result<(), StoreError> {
    store.health_check().await?;
    tracing::info!("Customer database health check passed");

    store.ensure_schema().await?;
    tracing::info!("Customer table ready");

    Ok(())
}

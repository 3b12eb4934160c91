//! [`CustomerStore`] backed by a SQLite file.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use intake_core::customer::CustomerRecord;
use intake_core::error::StoreError;
use intake_core::store::CustomerStore;
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

use crate::repositories::CustomerRepo;
use crate::StoreConfig;

/// SQLite-backed customer store.
///
/// Holds configuration and a count of connections currently open. Each call
/// acquires a connection, uses it, and closes it on both the success and the
/// error path. Clones share the count.
#[derive(Debug, Clone)]
pub struct SqliteCustomerStore {
    config: StoreConfig,
    open_connections: Arc<AtomicUsize>,
}

impl SqliteCustomerStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            open_connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Connections acquired by this store and not yet released.
    ///
    /// Zero whenever no operation is in flight.
    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::SeqCst)
    }

    /// Create the `customers` table if missing. Safe to call on every start.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        let outcome = crate::ensure_schema(&mut conn).await;
        self.release(conn).await;

        outcome.map_err(|e| {
            tracing::error!(error = %e, "Failed to create customers table");
            StoreError::Schema(Box::new(e))
        })
    }

    /// Round-trip a trivial query against the configured file.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        let outcome = crate::health_check(&mut conn).await;
        self.release(conn).await;

        outcome.map_err(|e| StoreError::Connect(Box::new(e)))
    }

    async fn acquire(&self) -> Result<SqliteConnection, StoreError> {
        let conn = crate::connect(&self.config).await.map_err(|e| {
            tracing::error!(
                error = %e,
                path = %self.config.database_path.display(),
                "Failed to open customer database",
            );
            StoreError::Connect(Box::new(e))
        })?;
        self.open_connections.fetch_add(1, Ordering::SeqCst);
        Ok(conn)
    }

    /// Close `conn`, logging rather than propagating a failed close.
    ///
    /// Dropping a connection also closes it; the explicit close waits for the
    /// worker to finish so the file lock is gone when this returns.
    async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close customer database connection");
        }
        self.open_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CustomerStore for SqliteCustomerStore {
    async fn insert(&self, record: &CustomerRecord) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        let outcome = CustomerRepo::create(&mut conn, record).await;
        self.release(conn).await;

        match outcome {
            Ok(id) => {
                tracing::debug!(customer_id = id, "Customer row inserted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to insert customer row");
                Err(StoreError::Write(Box::new(e)))
            }
        }
    }
}

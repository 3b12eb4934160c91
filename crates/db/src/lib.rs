//! SQLite persistence for customer records.
//!
//! Every operation opens its own connection from a [`StoreConfig`] and closes
//! it before returning. Nothing is pooled or cached between calls.

use std::path::PathBuf;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::SqliteCustomerStore;

/// File name used when no path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "customer_data.db";

/// How long a connection waits on another writer's lock before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the customer database lives and how to open it.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the SQLite file. Created on first connect if missing.
    pub database_path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .busy_timeout(self.busy_timeout)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

/// Open a single connection to the configured database file.
pub async fn connect(config: &StoreConfig) -> Result<SqliteConnection, sqlx::Error> {
    config.connect_options().connect().await
}

/// Verify the connection answers a trivial query.
pub async fn health_check(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}

/// Create the `customers` table if it does not exist yet.
///
/// Additive only: an existing table is left exactly as it is.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            birthday TEXT,
            email TEXT,
            phone TEXT,
            address TEXT,
            contact_method TEXT
        )",
    )
    .execute(conn)
    .await?;
    Ok(())
}

use std::time::Duration;

use intake_db::{SqliteCustomerStore, StoreConfig};
use sqlx::sqlite::SqliteConnection;
use tempfile::TempDir;

/// A throwaway database file inside its own temp directory.
///
/// The directory (and the file) is removed when this value is dropped, so
/// keep it alive for the whole test.
pub struct TestDb {
    _dir: TempDir,
    pub config: StoreConfig,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = StoreConfig::new(dir.path().join("customer_data.db"));
        // Short enough that a leaked lock fails the test quickly.
        config.busy_timeout = Duration::from_millis(250);
        Self { _dir: dir, config }
    }

    pub fn store(&self) -> SqliteCustomerStore {
        SqliteCustomerStore::new(self.config.clone())
    }

    /// A store whose schema has already been created.
    pub async fn ready_store(&self) -> SqliteCustomerStore {
        let store = self.store();
        store.ensure_schema().await.expect("ensure schema");
        store
    }

    pub async fn connect(&self) -> SqliteConnection {
        intake_db::connect(&self.config).await.expect("connect")
    }

    /// File handles this process currently holds on the database file.
    #[cfg(target_os = "linux")]
    pub fn open_handles(&self) -> usize {
        let target = std::fs::canonicalize(&self.config.database_path).expect("canonical path");
        std::fs::read_dir("/proc/self/fd")
            .expect("list fds")
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| std::fs::read_link(entry.path()).ok())
            .filter(|path| *path == target)
            .count()
    }
}

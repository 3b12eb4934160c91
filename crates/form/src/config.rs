use std::path::PathBuf;
use std::time::Duration;

use intake_db::{StoreConfig, DEFAULT_BUSY_TIMEOUT, DEFAULT_DATABASE_PATH};

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `json` in any case selects JSON; anything else is text.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Form configuration loaded from environment variables.
///
/// Every field has a default, so running without any environment behaves
/// like a fixed `customer_data.db` in the working directory.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// SQLite file holding the `customers` table (default: `customer_data.db`).
    pub database_path: PathBuf,
    /// Lock wait before a write gives up (default: `5000` ms).
    pub busy_timeout: Duration,
    /// Log line format (default: text).
    pub log_format: LogFormat,
}

impl FormConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default            |
    /// |-----------------------|--------------------|
    /// | `CUSTOMER_DB_PATH`    | `customer_data.db` |
    /// | `DB_BUSY_TIMEOUT_MS`  | `5000`             |
    /// | `LOG_FORMAT`          | `text`             |
    pub fn from_env() -> Self {
        let database_path = std::env::var("CUSTOMER_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        let busy_timeout = std::env::var("DB_BUSY_TIMEOUT_MS")
            .map(|v| {
                Duration::from_millis(v.parse().expect("DB_BUSY_TIMEOUT_MS must be a valid u64"))
            })
            .unwrap_or(DEFAULT_BUSY_TIMEOUT);

        let log_format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::from_name(&v))
            .unwrap_or(LogFormat::Text);

        Self {
            database_path,
            busy_timeout,
            log_format,
        }
    }

    /// The explicit store configuration handed to the SQLite store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            database_path: self.database_path.clone(),
            busy_timeout: self.busy_timeout,
        }
    }
}

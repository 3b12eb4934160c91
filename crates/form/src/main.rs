//! `intake-form` -- customer information intake.
//!
//! Prompts for a customer's details on stdin, validates them and saves each
//! accepted record to a local SQLite file. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default            | Description                      |
//! |----------------------|----------|--------------------|----------------------------------|
//! | `CUSTOMER_DB_PATH`   | no       | `customer_data.db` | SQLite file to write to          |
//! | `DB_BUSY_TIMEOUT_MS` | no       | `5000`             | Lock wait before a write fails   |
//! | `LOG_FORMAT`         | no       | `text`             | `json` for structured log lines  |
//! | `RUST_LOG`           | no       | `intake_form=info` | Log filter                       |

use intake_db::SqliteCustomerStore;
use intake_form::config::{FormConfig, LogFormat};
use intake_form::session::FormSession;
use intake_form::startup::prepare_store;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "intake_form=info,intake_core=info,intake_db=info";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = FormConfig::from_env();

    // --- Tracing ---
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    );
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!(
        path = %config.database_path.display(),
        "Loaded form configuration",
    );

    // --- Database ---
    let store = SqliteCustomerStore::new(config.store_config());

    if let Err(e) = prepare_store(&store).await {
        tracing::error!(error = %e, "Customer database could not be prepared");
        std::process::exit(1);
    }

    // --- Form ---
    let mut session = FormSession::new(
        store,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );

    if let Err(e) = session.run().await {
        tracing::error!(error = %e, "Customer form stopped");
        std::process::exit(1);
    }
}

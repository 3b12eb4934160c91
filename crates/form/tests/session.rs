//! Terminal form sessions driven by scripted input against a real store.

use intake_core::customer::ContactMethod;
use intake_db::repositories::CustomerRepo;
use intake_db::{SqliteCustomerStore, StoreConfig};
use intake_form::form::FormState;
use intake_form::session::{FormSession, SessionSummary};
use tempfile::TempDir;

async fn ready_store(dir: &TempDir) -> (StoreConfig, SqliteCustomerStore) {
    let config = StoreConfig::new(dir.path().join("customer_data.db"));
    let store = SqliteCustomerStore::new(config.clone());
    store.ensure_schema().await.expect("ensure schema");
    (config, store)
}

/// Run a whole session over `script`, returning the summary, the final form
/// state and everything written to the output.
async fn run_script(
    store: SqliteCustomerStore,
    script: &str,
) -> (SessionSummary, FormState, String) {
    let mut session = FormSession::new(store, script.as_bytes(), Vec::new());
    let summary = session.run().await.expect("session runs");
    let form = session.form().clone();
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (summary, form, output)
}

// ---------------------------------------------------------------------------
// Test: a complete form is saved and the form resets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_form_is_saved_and_cleared() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, store) = ready_store(&dir).await;

    let script = "Jane Doe\n\njane@example.com\n555-1234\n\nPhone\n";
    let (summary, form, output) = run_script(store, script).await;

    assert_eq!(
        summary,
        SessionSummary {
            submitted: 1,
            persisted: 1
        }
    );
    assert_eq!(form, FormState::default());
    assert!(output.contains("== Customer Information Submission =="));
    assert!(output.contains("Success: Customer information submitted successfully!"));

    let mut conn = intake_db::connect(&config).await.expect("connect");
    let row = CustomerRepo::find_by_id(&mut conn, 1)
        .await
        .expect("find")
        .expect("row saved");
    assert_eq!(row.name, "Jane Doe");
    assert_eq!(row.email.as_deref(), Some("jane@example.com"));
    assert_eq!(row.phone.as_deref(), Some("555-1234"));
    assert_eq!(row.birthday.as_deref(), Some(""));
    assert_eq!(row.contact_method.as_deref(), Some("Phone"));
}

// ---------------------------------------------------------------------------
// Test: a rejected form keeps its values for correction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejected_form_keeps_values_for_next_round() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, store) = ready_store(&dir).await;

    // Round 1 has a bad email; round 2 only fixes the email.
    let script = "Jane\n\nnot-an-email\n\n\n\n\
                  \n\njane@example.com\n\n\n\n";
    let (summary, form, output) = run_script(store, script).await;

    assert_eq!(
        summary,
        SessionSummary {
            submitted: 2,
            persisted: 1
        }
    );
    assert_eq!(form, FormState::default());
    assert!(output.contains("Validation Error: Please enter a valid email address."));
    assert!(output.contains("Name: [Jane]"));
    assert!(output.contains("Email: [not-an-email]"));

    let mut conn = intake_db::connect(&config).await.expect("connect");
    assert_eq!(CustomerRepo::count(&mut conn).await.expect("count"), 1);
    let row = CustomerRepo::find_by_id(&mut conn, 1)
        .await
        .expect("find")
        .expect("row saved");
    assert_eq!(row.name, "Jane");
    assert_eq!(row.contact_method.as_deref(), Some("Email"));
}

#[tokio::test]
async fn clear_token_blanks_a_retained_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, store) = ready_store(&dir).await;

    let script = "Jane\n2024/01/15\n\n\n\n\n\
                  \n-\n\n\n\n\n";
    let (summary, _form, output) = run_script(store, script).await;

    assert_eq!(summary.persisted, 1);
    assert!(output.contains("Validation Error: Birthday must be in YYYY-MM-DD format."));

    let mut conn = intake_db::connect(&config).await.expect("connect");
    let row = CustomerRepo::find_by_id(&mut conn, 1)
        .await
        .expect("find")
        .expect("row saved");
    assert_eq!(row.birthday.as_deref(), Some(""));
}

// ---------------------------------------------------------------------------
// Test: contact method selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_contact_method_is_asked_again() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, store) = ready_store(&dir).await;

    let script = "Jane\n\n\n\n\nFax\nmail\n";
    let (summary, _form, output) = run_script(store, script).await;

    assert_eq!(summary.persisted, 1);
    assert!(output.contains("Choose one of: Email, Phone, Mail, Any"));
    assert!(output.contains("Preferred Contact Method: (Email/Phone/Mail/Any) [Email]"));

    let mut conn = intake_db::connect(&config).await.expect("connect");
    let row = CustomerRepo::find_by_id(&mut conn, 1)
        .await
        .expect("find")
        .expect("row saved");
    assert_eq!(
        row.contact_method.as_deref(),
        Some(ContactMethod::Mail.as_str())
    );
}

// ---------------------------------------------------------------------------
// Test: end of input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn input_ending_mid_form_submits_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, store) = ready_store(&dir).await;

    let (summary, form, _output) = run_script(store, "Jane\n1990-01-01\n").await;

    assert_eq!(summary, SessionSummary::default());
    assert_eq!(form.name, "Jane");

    let mut conn = intake_db::connect(&config).await.expect("connect");
    assert_eq!(CustomerRepo::count(&mut conn).await.expect("count"), 0);
}

#[tokio::test]
async fn failed_save_shows_generic_error_and_keeps_form() {
    let dir = tempfile::tempdir().expect("temp dir");
    // No schema: every insert fails.
    let store = SqliteCustomerStore::new(StoreConfig::new(dir.path().join("empty.db")));

    let (summary, form, output) = run_script(store, "Jane\n\n\n\n\n\n").await;

    assert_eq!(
        summary,
        SessionSummary {
            submitted: 1,
            persisted: 0
        }
    );
    assert!(output.contains("Error: Failed to save information to the database."));
    assert!(!output.contains("no such table"));
    assert_eq!(form.name, "Jane");
}

//! Maps submission outcomes to the messages shown to the user.

use std::fmt;

use intake_core::submission::SubmissionResult;

/// Shown when the store fails. The underlying cause only goes to the log.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save information to the database.";

pub const SAVED_MESSAGE: &str = "Customer information submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message box worth of feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub severity: Severity,
    pub title: &'static str,
    pub body: String,
}

impl UserMessage {
    pub fn for_result(result: &SubmissionResult) -> Self {
        match result {
            SubmissionResult::Persisted => Self {
                severity: Severity::Info,
                title: "Success",
                body: SAVED_MESSAGE.to_string(),
            },
            SubmissionResult::ValidationFailed(failure) => Self {
                severity: Severity::Error,
                title: "Validation Error",
                body: failure.to_string(),
            },
            SubmissionResult::PersistenceFailed(_) => Self {
                severity: Severity::Error,
                title: "Error",
                body: SAVE_FAILED_MESSAGE.to_string(),
            },
        }
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

//! Line-oriented front-end for the customer form.
//!
//! Each round prompts for every field, submits, and prints the outcome.
//! Values survive a failed round and are offered again in brackets: an empty
//! answer keeps the shown value and [`CLEAR_TOKEN`] blanks it. End of input
//! closes the form.

use intake_core::customer::ContactMethod;
use intake_core::store::CustomerStore;
use intake_core::submission::{submit, SubmissionResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::feedback::UserMessage;
use crate::form::{Field, FormState, CONTACT_METHOD_LABEL};

pub const FORM_TITLE: &str = "Customer Information Submission";

/// Answer that empties a previously entered value.
pub const CLEAR_TOKEN: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Form I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts reported when the form closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub submitted: usize,
    pub persisted: usize,
}

pub struct FormSession<S, R, W> {
    store: S,
    input: R,
    output: W,
    form: FormState,
}

impl<S, R, W> FormSession<S, R, W>
where
    S: CustomerStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            form: FormState::default(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run rounds until the input is exhausted.
    pub async fn run(&mut self) -> Result<SessionSummary, FormError> {
        let mut summary = SessionSummary::default();

        while let Some(result) = self.round().await? {
            summary.submitted += 1;
            if matches!(result, SubmissionResult::Persisted) {
                summary.persisted += 1;
            }
        }

        tracing::info!(
            submitted = summary.submitted,
            persisted = summary.persisted,
            "Customer form closed",
        );
        Ok(summary)
    }

    /// Fill in the form once and submit it.
    ///
    /// Returns `None` if the input ended before the form was complete; nothing
    /// is submitted in that case.
    pub async fn round(&mut self) -> Result<Option<SubmissionResult>, FormError> {
        self.write(&format!("\n== {FORM_TITLE} ==\n")).await?;

        for field in Field::ALL {
            let current = self.form.value(field).to_string();
            let Some(value) = self.prompt_text(field.label(), &current).await? else {
                return Ok(None);
            };
            self.form.set(field, value);
        }

        let Some(method) = self.prompt_contact_method().await? else {
            return Ok(None);
        };
        self.form.contact_method = method;

        let result = submit(&self.store, &self.form.fields()).await;
        let message = self.form.apply(&result);
        self.show(&message).await?;

        Ok(Some(result))
    }

    async fn prompt_text(
        &mut self,
        label: &str,
        current: &str,
    ) -> Result<Option<String>, FormError> {
        let prompt = if current.is_empty() {
            format!("{label} ")
        } else {
            format!("{label} [{current}] ")
        };
        self.write(&prompt).await?;

        let Some(answer) = self.read_answer().await? else {
            return Ok(None);
        };

        let value = match answer.as_str() {
            "" => current.to_string(),
            CLEAR_TOKEN => String::new(),
            _ => answer,
        };
        Ok(Some(value))
    }

    async fn prompt_contact_method(&mut self) -> Result<Option<ContactMethod>, FormError> {
        let options = ContactMethod::ALL.map(ContactMethod::as_str).join("/");

        loop {
            let prompt = format!(
                "{CONTACT_METHOD_LABEL} ({options}) [{}] ",
                self.form.contact_method
            );
            self.write(&prompt).await?;

            let Some(answer) = self.read_answer().await? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                return Ok(Some(self.form.contact_method));
            }
            match answer.parse::<ContactMethod>() {
                Ok(method) => return Ok(Some(method)),
                Err(e) => {
                    tracing::debug!(error = %e, "Contact method re-prompted");
                    self.write(&format!("Choose one of: {}\n", options.replace('/', ", ")))
                        .await?;
                }
            }
        }
    }

    /// Read one line without its terminator. `None` at end of input.
    async fn read_answer(&mut self) -> Result<Option<String>, FormError> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    async fn show(&mut self, message: &UserMessage) -> Result<(), FormError> {
        self.write(&format!("{message}\n")).await
    }

    async fn write(&mut self, text: &str) -> Result<(), FormError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

//! In-memory state of the customer form.

use intake_core::customer::{ContactMethod, CustomerFields};
use intake_core::submission::SubmissionResult;

use crate::feedback::UserMessage;

/// Free-text fields, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Birthday,
    Email,
    Phone,
    Address,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Self::Name,
        Self::Birthday,
        Self::Email,
        Self::Phone,
        Self::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name:",
            Self::Birthday => "Birthday (YYYY-MM-DD):",
            Self::Email => "Email:",
            Self::Phone => "Phone Number:",
            Self::Address => "Address:",
        }
    }
}

/// Label for the contact method selector.
pub const CONTACT_METHOD_LABEL: &str = "Preferred Contact Method:";

/// Current widget values. Starts empty with `Email` selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Birthday => &self.birthday,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Birthday => &mut self.birthday,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Snapshot of the widget values in the pipeline's input shape.
    pub fn fields(&self) -> CustomerFields {
        CustomerFields {
            name: self.name.clone(),
            birthday: self.birthday.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            contact_method: self.contact_method.as_str().to_string(),
        }
    }

    /// Empty every field and reset the contact method to `Email`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// React to a submission outcome: clear after a save, otherwise keep the
    /// values so they can be corrected.
    pub fn apply(&mut self, result: &SubmissionResult) -> UserMessage {
        if matches!(result, SubmissionResult::Persisted) {
            self.clear();
        }
        UserMessage::for_result(result)
    }
}

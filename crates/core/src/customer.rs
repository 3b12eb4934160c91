//! Customer field set and the record handed to the store.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Contact method
// ---------------------------------------------------------------------------

/// Preferred way of reaching a customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Mail,
    Any,
}

impl ContactMethod {
    /// All options, in the order the form offers them.
    pub const ALL: [ContactMethod; 4] = [Self::Email, Self::Phone, Self::Mail, Self::Any];

    /// Canonical stored form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Mail => "Mail",
            Self::Any => "Any",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the [`ContactMethod`] options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contact method: {0}")]
pub struct UnknownContactMethod(pub String);

impl FromStr for ContactMethod {
    type Err = UnknownContactMethod;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownContactMethod(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Raw input and validated record
// ---------------------------------------------------------------------------

/// Raw field values as read from the form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: String,
}

impl CustomerFields {
    /// Copy of the fields with surrounding whitespace removed from each one.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            birthday: self.birthday.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            contact_method: self.contact_method.trim().to_string(),
        }
    }
}

/// A validated customer, ready for a single insert.
///
/// Optional fields that were left blank are empty strings. The identity is
/// assigned by the store and is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: String,
}

impl CustomerRecord {
    /// Build a record from already trimmed and validated fields.
    ///
    /// A blank contact method becomes [`ContactMethod::default`].
    pub(crate) fn from_trimmed(fields: CustomerFields) -> Self {
        let contact_method = if fields.contact_method.is_empty() {
            ContactMethod::default().as_str().to_string()
        } else {
            fields.contact_method
        };

        Self {
            name: fields.name,
            birthday: fields.birthday,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            contact_method,
        }
    }
}

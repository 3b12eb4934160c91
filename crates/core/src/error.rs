/// Boxed underlying cause carried by [`StoreError`].
///
/// Keeps `intake-core` free of any particular database driver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A rejection raised before any persistence attempt.
///
/// The `Display` text is the message shown to the person filling in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Customer Name is required.")]
    NameRequired,

    #[error("Please enter a valid email address.")]
    EmailInvalid,

    #[error("Birthday must be in YYYY-MM-DD format.")]
    DateInvalid,
}

impl ValidationFailure {
    /// Stable machine-readable code for the failure.
    pub fn code(self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::EmailInvalid => "email_invalid",
            Self::DateInvalid => "date_invalid",
        }
    }
}

/// An environmental storage failure (disk, permissions, lock contention).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open customer database: {0}")]
    Connect(#[source] BoxError),

    #[error("Failed to create customer schema: {0}")]
    Schema(#[source] BoxError),

    #[error("Failed to write customer record: {0}")]
    Write(#[source] BoxError),
}

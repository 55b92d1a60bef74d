/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// These are the only failures a `UserStore` can produce. All of them
/// are expected, locally-recoverable outcomes; the HTTP layer maps each
/// variant to a status code and a fixed wire message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No record with the given id
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Required input absent or empty
    #[error("name and email are required")]
    MissingFields,

    /// Email uniqueness violation
    #[error("email already in use: {0}")]
    DuplicateEmail(String),
}

impl RosterError {
    /// Create a not-found error for a user id
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound(id.into())
    }

    /// Create a duplicate-email error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail(email.into())
    }
}

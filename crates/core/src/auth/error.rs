//! Authentication error types.

use thiserror::Error;

use super::password::PasswordError;
use crate::ledger::LedgerError;

/// Errors raised by registration, login and session-bound operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with a login that already exists.
    #[error("Login already taken: {0}")]
    LoginTaken(String),

    /// Password does not match the stored hash.
    #[error("Wrong password for user: {0}")]
    WrongPassword(String),

    /// The operation needs a logged-in user.
    #[error("No user is logged in")]
    NotAuthenticated,

    /// Hashing or verifying the password failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Input validation or lookup failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The repository could not persist the users.
    #[error("failed to save users: {0}")]
    Storage(String),
}

impl AuthError {
    /// Returns true when a user or budget lookup failed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Ledger(e) if e.is_not_found())
    }
}

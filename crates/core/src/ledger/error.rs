//! Ledger error types for validation and lookup failures.
//!
//! Every error the ledger core raises is caused by user input and falls into
//! one of two kinds (see [`ErrorKind`]). None of them is fatal: the caller can
//! retry the same operation with corrected input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was rejected before anything was changed.
    Validation,
    /// The operation targets something that does not exist.
    NotFound,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// A required text field is empty or blank.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// An amount that must be strictly positive is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveAmount {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// Budget limits cannot be negative.
    #[error("Budget limit cannot be negative: {0}")]
    NegativeLimit(Decimal),

    /// A category-filtered aggregation was given no categories.
    #[error("Category list must contain at least one category")]
    EmptyCategoryFilter,

    /// A date string is not a `dd.mm.yyyy` calendar date.
    #[error("Invalid date '{0}', expected dd.mm.yyyy")]
    InvalidDate(String),

    /// A date range ends before it starts.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Sender and recipient of a transfer are the same user.
    #[error("Cannot transfer money to yourself")]
    SelfTransfer,

    // ========== Not-Found Errors ==========
    /// No budget exists for the category.
    #[error("Budget not found for category: {0}")]
    BudgetNotFound(String),

    /// No user exists with the login.
    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl LedgerError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BudgetNotFound(_) | Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::EmptyField { .. }
            | Self::NonPositiveAmount { .. }
            | Self::NegativeLimit(_)
            | Self::EmptyCategoryFilter
            | Self::InvalidDate(_)
            | Self::InvalidDateRange { .. }
            | Self::SelfTransfer => ErrorKind::Validation,
        }
    }

    /// Returns true for validation errors.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    /// Returns true for not-found errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }
}

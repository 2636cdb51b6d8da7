//! Input validation shared by the ledger services.

use rust_decimal::Decimal;

use super::error::LedgerError;

/// Rejects empty or whitespace-only text.
///
/// # Errors
///
/// Returns `LedgerError::EmptyField` naming `field`.
pub fn require_text<'a>(value: &'a str, field: &'static str) -> Result<&'a str, LedgerError> {
    if value.trim().is_empty() {
        return Err(LedgerError::EmptyField { field });
    }
    Ok(value)
}

/// Rejects zero and negative amounts.
///
/// # Errors
///
/// Returns `LedgerError::NonPositiveAmount` naming `field`.
pub fn require_positive(value: Decimal, field: &'static str) -> Result<Decimal, LedgerError> {
    if value <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount { field, value });
    }
    Ok(value)
}

//! Money formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` everywhere; these helpers only render them.

use rust_decimal::Decimal;

/// Formats an amount with exactly two decimal places (`270` → `"270.00"`).
///
/// Rounds half away from zero, the way receipts do.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Formats a percentage with one decimal place (`85` → `"85.0"`).
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}")
}

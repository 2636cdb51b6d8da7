//! Notification types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::config::NotificationConfig;
use tally_shared::types::{format_amount, format_percent};

/// An advisory produced by a wallet scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// Budget usage reached the warning band but not the limit.
    BudgetNearLimit {
        /// Budget category.
        category: String,
        /// `spent / limit * 100`.
        usage_percentage: Decimal,
        /// Amount left before the limit.
        remaining: Decimal,
    },
    /// Spending went over the limit.
    BudgetExceeded {
        /// Budget category.
        category: String,
        /// How far spending is above the limit.
        overspend: Decimal,
    },
    /// Balance is exactly zero.
    ZeroBalance,
    /// Balance is below zero.
    NegativeBalance {
        /// Current balance.
        balance: Decimal,
    },
    /// Balance is under the configured share of total income.
    LowBalance {
        /// Current balance.
        balance: Decimal,
        /// Threshold as a percentage of total income.
        threshold_percent: Decimal,
    },
    /// Total expense is above total income.
    ExpensesExceedIncome {
        /// `expense - income`.
        difference: Decimal,
    },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetNearLimit {
                category,
                usage_percentage,
                remaining,
            } => write!(
                f,
                "Budget for {category} is {}% used (remaining: {})",
                format_percent(*usage_percentage),
                format_amount(*remaining)
            ),
            Self::BudgetExceeded { category, overspend } => write!(
                f,
                "Budget for {category} exceeded! Overspent by {}",
                format_amount(*overspend)
            ),
            Self::ZeroBalance => write!(f, "Your balance is zero"),
            Self::NegativeBalance { balance } => {
                write!(f, "Negative balance: {}", format_amount(*balance))
            }
            Self::LowBalance {
                balance,
                threshold_percent,
            } => write!(
                f,
                "Low balance: {} (less than {}% of total income)",
                format_amount(*balance),
                threshold_percent.normalize()
            ),
            Self::ExpensesExceedIncome { difference } => {
                write!(f, "Expenses exceed income by {}", format_amount(*difference))
            }
        }
    }
}

/// Percentages that trigger notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationThresholds {
    /// Budget usage, in percent, from which a near-limit warning is raised.
    pub near_limit_percent: Decimal,
    /// Share of total income, in percent, under which the balance counts as low.
    pub low_balance_percent: Decimal,
}

impl Default for NotificationThresholds {
    fn default() -> Self {
        Self {
            near_limit_percent: Decimal::from(80),
            low_balance_percent: Decimal::TEN,
        }
    }
}

impl From<&NotificationConfig> for NotificationThresholds {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            near_limit_percent: Decimal::from(config.near_limit_percent),
            low_balance_percent: Decimal::from(config.low_balance_percent),
        }
    }
}

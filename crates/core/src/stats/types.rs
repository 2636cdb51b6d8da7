//! Statistics output types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::Budget;

/// Snapshot of a wallet for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// Current balance.
    pub balance: Decimal,
    /// Total income over the whole history.
    pub total_income: Decimal,
    /// Total expense over the whole history.
    pub total_expense: Decimal,
    /// Income per category.
    pub income_by_category: BTreeMap<String, Decimal>,
    /// Expense per category.
    pub expense_by_category: BTreeMap<String, Decimal>,
    /// One entry per budget, in budget order.
    pub budgets: Vec<BudgetStatus>,
}

/// State of a single budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// Budget category.
    pub category: String,
    /// Spending cap.
    pub limit: Decimal,
    /// Spent so far.
    pub spent: Decimal,
    /// `limit - spent`, negative when exceeded.
    pub remaining: Decimal,
    /// `spent / limit * 100`.
    pub usage_percentage: Decimal,
    /// Whether spending is above the cap.
    pub is_exceeded: bool,
}

impl From<&Budget> for BudgetStatus {
    fn from(budget: &Budget) -> Self {
        Self {
            category: budget.category().to_owned(),
            limit: budget.limit(),
            spent: budget.spent(),
            remaining: budget.remaining(),
            usage_percentage: budget.usage_percentage(),
            is_exceeded: budget.is_exceeded(),
        }
    }
}

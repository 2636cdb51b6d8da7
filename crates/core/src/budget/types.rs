//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{BudgetId, EntityMeta};

use crate::ledger::LedgerError;
use crate::ledger::validation::require_text;

/// A spending cap and running total for one category.
///
/// `spent` only grows through recorded expenses. Limit edits keep it and
/// renames carry it over into a fresh budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord")]
pub struct Budget {
    #[serde(flatten)]
    meta: EntityMeta<BudgetId>,
    category: String,
    limit: Decimal,
    spent: Decimal,
}

/// Unvalidated wire form of a [`Budget`].
#[derive(Deserialize)]
struct BudgetRecord {
    #[serde(flatten)]
    meta: EntityMeta<BudgetId>,
    category: String,
    limit: Decimal,
    #[serde(default)]
    spent: Decimal,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = LedgerError;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        require_text(&record.category, "Category")?;
        check_limit(record.limit)?;
        Ok(Self {
            meta: record.meta,
            category: record.category,
            limit: record.limit,
            spent: record.spent.max(Decimal::ZERO),
        })
    }
}

fn check_limit(limit: Decimal) -> Result<Decimal, LedgerError> {
    if limit < Decimal::ZERO {
        return Err(LedgerError::NegativeLimit(limit));
    }
    Ok(limit)
}

impl Budget {
    /// Creates a budget with nothing spent yet.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyField` for a blank category and
    /// `LedgerError::NegativeLimit` when `limit < 0`.
    pub fn new(category: impl Into<String>, limit: Decimal) -> Result<Self, LedgerError> {
        let category = category.into();
        require_text(&category, "Category")?;
        Ok(Self {
            meta: EntityMeta::now(),
            category,
            limit: check_limit(limit)?,
            spent: Decimal::ZERO,
        })
    }

    /// Seeds the running total, e.g. from expenses recorded before the budget existed.
    #[must_use]
    pub(crate) fn with_spent(mut self, spent: Decimal) -> Self {
        self.spent = spent;
        self
    }

    /// A fresh budget under `category` carrying this one's limit and spent total.
    #[must_use]
    pub(crate) fn renamed(&self, category: impl Into<String>) -> Self {
        Self {
            meta: EntityMeta::now(),
            category: category.into(),
            limit: self.limit,
            spent: self.spent,
        }
    }

    /// Replaces the limit, keeping the spent total.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeLimit` when `limit < 0`; the budget is left unchanged.
    pub fn set_limit(&mut self, limit: Decimal) -> Result<(), LedgerError> {
        self.limit = check_limit(limit)?;
        Ok(())
    }

    pub(crate) fn add_expense(&mut self, amount: Decimal) {
        self.spent += amount;
    }

    /// Budget ID.
    #[must_use]
    pub const fn id(&self) -> BudgetId {
        self.meta.id
    }

    /// Category this budget tracks.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Spending cap.
    #[must_use]
    pub const fn limit(&self) -> Decimal {
        self.limit
    }

    /// Expenses accumulated against the cap.
    #[must_use]
    pub const fn spent(&self) -> Decimal {
        self.spent
    }

    /// `limit - spent`; negative once the budget is exceeded.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.limit - self.spent
    }

    /// `spent / limit * 100`, or zero for a zero limit.
    ///
    /// Saturates at `Decimal::MAX` when the ratio is not representable.
    #[must_use]
    pub fn usage_percentage(&self) -> Decimal {
        if self.limit.is_zero() {
            return Decimal::ZERO;
        }
        self.spent
            .checked_div(self.limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    }

    /// True when spending is strictly above the limit.
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.spent > self.limit
    }
}

/// Budgets of one wallet keyed by category, in insertion order.
///
/// Replacing an existing key keeps its position; new keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Budget>", into = "Vec<Budget>")]
pub struct BudgetBook {
    entries: Vec<Budget>,
}

impl BudgetBook {
    /// Empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.entries.iter().position(|b| b.category == category)
    }

    /// Budget for `category`, if any.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.entries.iter().find(|b| b.category == category)
    }

    /// Mutable budget for `category`, if any.
    pub fn get_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.entries.iter_mut().find(|b| b.category == category)
    }

    /// Returns true when a budget exists for `category`.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.position(category).is_some()
    }

    /// Installs `budget` under its category and returns the budget it replaced.
    pub fn insert(&mut self, budget: Budget) -> Option<Budget> {
        match self.position(&budget.category) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], budget)),
            None => {
                self.entries.push(budget);
                None
            }
        }
    }

    /// Removes and returns the budget for `category`.
    pub fn remove(&mut self, category: &str) -> Option<Budget> {
        self.position(category).map(|index| self.entries.remove(index))
    }

    /// Budgets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Budget> {
        self.entries.iter()
    }

    /// Number of budgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no budget is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Budget>> for BudgetBook {
    fn from(budgets: Vec<Budget>) -> Self {
        let mut book = Self::new();
        for budget in budgets {
            book.insert(budget);
        }
        book
    }
}

impl From<BudgetBook> for Vec<Budget> {
    fn from(book: BudgetBook) -> Self {
        book.entries
    }
}

impl<'a> IntoIterator for &'a BudgetBook {
    type Item = &'a Budget;
    type IntoIter = std::slice::Iter<'a, Budget>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

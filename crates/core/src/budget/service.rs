//! Budget service for installing and editing category budgets.

use rust_decimal::Decimal;

use super::types::Budget;
use crate::ledger::validation::{require_positive, require_text};
use crate::ledger::{LedgerError, TransactionKind, Wallet};
use crate::query::TransactionQuery;
use crate::stats::StatisticsService;

/// Budget service for per-category spending limits.
pub struct BudgetService;

impl BudgetService {
    /// Installs a budget for `category`, replacing any existing one.
    ///
    /// The new budget starts out having spent everything already recorded
    /// as expense under `category`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank category or a non-positive limit.
    pub fn set_budget(
        wallet: &mut Wallet,
        category: &str,
        limit: Decimal,
    ) -> Result<(), LedgerError> {
        require_text(category, "Category")?;
        require_positive(limit, "Limit")?;

        let history = TransactionQuery::new()
            .with_kind(TransactionKind::Expense)
            .with_categories([category]);
        let spent = StatisticsService::total(wallet, &history);

        wallet.install_budget(Budget::new(category, limit)?.with_spent(spent));
        Ok(())
    }

    /// Changes the limit of an existing budget, keeping what was spent.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank category or a non-positive
    /// limit and `LedgerError::BudgetNotFound` when no budget exists.
    pub fn update_budget_limit(
        wallet: &mut Wallet,
        category: &str,
        new_limit: Decimal,
    ) -> Result<(), LedgerError> {
        require_text(category, "Category")?;
        require_positive(new_limit, "Limit")?;

        wallet
            .budget_mut(category)
            .ok_or_else(|| LedgerError::BudgetNotFound(category.to_owned()))?
            .set_limit(new_limit)
    }

    /// Moves the budget for `old` to `new`, carrying its limit and spent total.
    ///
    /// A budget already installed under `new` is replaced and returned.
    /// Renaming to the current name leaves the wallet untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name and
    /// `LedgerError::BudgetNotFound` when `old` has no budget.
    pub fn rename_budget_category(
        wallet: &mut Wallet,
        old: &str,
        new: &str,
    ) -> Result<Option<Budget>, LedgerError> {
        require_text(old, "Old category")?;
        require_text(new, "New category")?;

        let current = wallet
            .budget(old)
            .ok_or_else(|| LedgerError::BudgetNotFound(old.to_owned()))?;
        if old == new {
            return Ok(None);
        }
        let renamed = current.renamed(new);

        wallet.remove_budget(old);
        Ok(wallet.install_budget(renamed))
    }

    /// Remaining amount of the budget for `category`, or zero without one.
    #[must_use]
    pub fn remaining(wallet: &Wallet, category: &str) -> Decimal {
        wallet
            .budget(category)
            .map_or(Decimal::ZERO, Budget::remaining)
    }
}

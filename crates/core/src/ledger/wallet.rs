//! Wallet: balance, transaction history and budgets of one user.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{EntityMeta, UserId, WalletId};

use super::transaction::{Transaction, TransactionKind};
use crate::budget::{Budget, BudgetBook};

/// A user's ledger.
///
/// `balance` always equals the signed sum of `transactions`. It is kept
/// incrementally by [`Wallet::record_transaction`], the only path that
/// appends history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(flatten)]
    meta: EntityMeta<WalletId>,
    balance: Decimal,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budgets: BudgetBook,
}

impl Wallet {
    /// Empty wallet owned by `owner`. The wallet shares the owner's ID.
    #[must_use]
    pub fn new(owner: UserId) -> Self {
        Self {
            meta: EntityMeta::with_id(owner.into(), Local::now().naive_local()),
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            budgets: BudgetBook::new(),
        }
    }

    /// Appends `tx` and applies it to the balance.
    ///
    /// An expense also counts against the budget of its category when one
    /// exists. No budget means no tracking, not an error.
    pub fn record_transaction(&mut self, tx: Transaction) {
        match tx.kind() {
            TransactionKind::Income => self.balance += tx.amount(),
            TransactionKind::Expense => {
                self.balance -= tx.amount();
                if let Some(budget) = self.budgets.get_mut(tx.category()) {
                    budget.add_expense(tx.amount());
                }
            }
        }
        self.transactions.push(tx);
    }

    /// Wallet ID.
    #[must_use]
    pub const fn id(&self) -> WalletId {
        self.meta.id
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.meta.created_at
    }

    /// Running balance.
    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    /// Transaction history in recording order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All budgets in insertion order.
    #[must_use]
    pub const fn budgets(&self) -> &BudgetBook {
        &self.budgets
    }

    /// Budget for `category`, if any.
    #[must_use]
    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.get(category)
    }

    /// Signed sum of the history, recomputed from scratch.
    #[must_use]
    pub fn recomputed_balance(&self) -> Decimal {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Installs `budget`, returning the one it replaced under the same category.
    pub(crate) fn install_budget(&mut self, budget: Budget) -> Option<Budget> {
        self.budgets.insert(budget)
    }

    pub(crate) fn budget_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.budgets.get_mut(category)
    }

    pub(crate) fn remove_budget(&mut self, category: &str) -> Option<Budget> {
        self.budgets.remove(category)
    }
}

//! Statistics service: totals and category breakdowns over a wallet.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{BudgetStatus, WalletSummary};
use crate::ledger::{LedgerError, TransactionKind, Wallet};
use crate::query::{DateRange, TransactionQuery};

/// Statistics service. All methods are pure reads.
pub struct StatisticsService;

impl StatisticsService {
    /// Sum of the amounts of matching transactions, in history order.
    #[must_use]
    pub fn total(wallet: &Wallet, query: &TransactionQuery) -> Decimal {
        wallet
            .transactions()
            .iter()
            .filter(query.predicate())
            .map(|tx| tx.amount())
            .sum()
    }

    /// Per-category sums of matching transactions.
    ///
    /// Only categories with at least one match appear.
    #[must_use]
    pub fn group_by_category(wallet: &Wallet, query: &TransactionQuery) -> BTreeMap<String, Decimal> {
        let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
        for tx in wallet.transactions().iter().filter(query.predicate()) {
            *groups.entry(tx.category().to_owned()).or_default() += tx.amount();
        }
        groups
    }

    /// Total income over the whole history.
    #[must_use]
    pub fn total_income(wallet: &Wallet) -> Decimal {
        Self::total(wallet, &of_kind(TransactionKind::Income))
    }

    /// Total expense over the whole history.
    #[must_use]
    pub fn total_expense(wallet: &Wallet) -> Decimal {
        Self::total(wallet, &of_kind(TransactionKind::Expense))
    }

    /// Total income in the given categories.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyCategoryFilter` for an empty list.
    pub fn total_income_in<I, S>(wallet: &Wallet, categories: I) -> Result<Decimal, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let query = in_categories(TransactionKind::Income, categories)?;
        Ok(Self::total(wallet, &query))
    }

    /// Total expense in the given categories.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyCategoryFilter` for an empty list.
    pub fn total_expense_in<I, S>(wallet: &Wallet, categories: I) -> Result<Decimal, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let query = in_categories(TransactionKind::Expense, categories)?;
        Ok(Self::total(wallet, &query))
    }

    /// Total income between two `dd.mm.yyyy` dates, both days included.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` or `LedgerError::InvalidDateRange`.
    pub fn total_income_between(wallet: &Wallet, from: &str, to: &str) -> Result<Decimal, LedgerError> {
        let query = between(TransactionKind::Income, from, to)?;
        Ok(Self::total(wallet, &query))
    }

    /// Total expense between two `dd.mm.yyyy` dates, both days included.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` or `LedgerError::InvalidDateRange`.
    pub fn total_expense_between(wallet: &Wallet, from: &str, to: &str) -> Result<Decimal, LedgerError> {
        let query = between(TransactionKind::Expense, from, to)?;
        Ok(Self::total(wallet, &query))
    }

    /// Income grouped by category.
    #[must_use]
    pub fn income_by_category(wallet: &Wallet) -> BTreeMap<String, Decimal> {
        Self::group_by_category(wallet, &of_kind(TransactionKind::Income))
    }

    /// Expense grouped by category.
    #[must_use]
    pub fn expense_by_category(wallet: &Wallet) -> BTreeMap<String, Decimal> {
        Self::group_by_category(wallet, &of_kind(TransactionKind::Expense))
    }

    /// Income grouped by category, limited to the given categories.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyCategoryFilter` for an empty list.
    pub fn income_by_category_in<I, S>(
        wallet: &Wallet,
        categories: I,
    ) -> Result<BTreeMap<String, Decimal>, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let query = in_categories(TransactionKind::Income, categories)?;
        Ok(Self::group_by_category(wallet, &query))
    }

    /// Expense grouped by category, limited to the given categories.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyCategoryFilter` for an empty list.
    pub fn expense_by_category_in<I, S>(
        wallet: &Wallet,
        categories: I,
    ) -> Result<BTreeMap<String, Decimal>, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let query = in_categories(TransactionKind::Expense, categories)?;
        Ok(Self::group_by_category(wallet, &query))
    }

    /// Income grouped by category between two `dd.mm.yyyy` dates.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` or `LedgerError::InvalidDateRange`.
    pub fn income_by_category_between(
        wallet: &Wallet,
        from: &str,
        to: &str,
    ) -> Result<BTreeMap<String, Decimal>, LedgerError> {
        let query = between(TransactionKind::Income, from, to)?;
        Ok(Self::group_by_category(wallet, &query))
    }

    /// Expense grouped by category between two `dd.mm.yyyy` dates.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` or `LedgerError::InvalidDateRange`.
    pub fn expense_by_category_between(
        wallet: &Wallet,
        from: &str,
        to: &str,
    ) -> Result<BTreeMap<String, Decimal>, LedgerError> {
        let query = between(TransactionKind::Expense, from, to)?;
        Ok(Self::group_by_category(wallet, &query))
    }

    /// True when total expense strictly exceeds total income.
    #[must_use]
    pub fn is_overspending(wallet: &Wallet) -> bool {
        Self::total_expense(wallet) > Self::total_income(wallet)
    }

    /// Balance, totals, breakdowns and budget status in one snapshot.
    #[must_use]
    pub fn summary(wallet: &Wallet) -> WalletSummary {
        WalletSummary {
            balance: wallet.balance(),
            total_income: Self::total_income(wallet),
            total_expense: Self::total_expense(wallet),
            income_by_category: Self::income_by_category(wallet),
            expense_by_category: Self::expense_by_category(wallet),
            budgets: wallet.budgets().iter().map(BudgetStatus::from).collect(),
        }
    }
}

fn of_kind(kind: TransactionKind) -> TransactionQuery {
    TransactionQuery::new().with_kind(kind)
}

fn in_categories<I, S>(kind: TransactionKind, categories: I) -> Result<TransactionQuery, LedgerError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
    if categories.is_empty() {
        return Err(LedgerError::EmptyCategoryFilter);
    }
    Ok(of_kind(kind).with_categories(categories))
}

fn between(kind: TransactionKind, from: &str, to: &str) -> Result<TransactionQuery, LedgerError> {
    Ok(of_kind(kind).with_range(DateRange::parse(from, to)?))
}

//! Ledger transactions.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{EntityMeta, TransactionId};

use super::error::LedgerError;
use super::validation::{require_positive, require_text};

/// Direction of a transaction.
///
/// Persisted as the boolean `is_income` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum TransactionKind {
    /// Money coming into the wallet.
    Income,
    /// Money leaving the wallet.
    Expense,
}

impl TransactionKind {
    /// Returns true for income.
    #[must_use]
    pub const fn is_income(self) -> bool {
        matches!(self, Self::Income)
    }
}

impl From<bool> for TransactionKind {
    fn from(is_income: bool) -> Self {
        if is_income { Self::Income } else { Self::Expense }
    }
}

impl From<TransactionKind> for bool {
    fn from(kind: TransactionKind) -> Self {
        kind.is_income()
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// An income or expense event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    #[serde(flatten)]
    meta: EntityMeta<TransactionId>,
    amount: Decimal,
    category: String,
    #[serde(rename = "is_income")]
    kind: TransactionKind,
}

/// Unvalidated wire form of a [`Transaction`].
#[derive(Deserialize)]
struct TransactionRecord {
    #[serde(flatten)]
    meta: EntityMeta<TransactionId>,
    amount: Decimal,
    category: String,
    is_income: TransactionKind,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Self::build(record.is_income, record.category, record.amount, record.meta)
    }
}

impl Transaction {
    /// Creates a transaction stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EmptyField` for a blank category and
    /// `LedgerError::NonPositiveAmount` unless `amount > 0`.
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, LedgerError> {
        Self::build(kind, category.into(), amount, EntityMeta::now())
    }

    /// Creates a transaction with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Same as [`Transaction::new`].
    pub fn new_at(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Decimal,
        created_at: NaiveDateTime,
    ) -> Result<Self, LedgerError> {
        Self::build(kind, category.into(), amount, EntityMeta::at(created_at))
    }

    /// Shorthand for an income transaction stamped now.
    ///
    /// # Errors
    ///
    /// Same as [`Transaction::new`].
    pub fn income(category: impl Into<String>, amount: Decimal) -> Result<Self, LedgerError> {
        Self::new(TransactionKind::Income, category, amount)
    }

    /// Shorthand for an expense transaction stamped now.
    ///
    /// # Errors
    ///
    /// Same as [`Transaction::new`].
    pub fn expense(category: impl Into<String>, amount: Decimal) -> Result<Self, LedgerError> {
        Self::new(TransactionKind::Expense, category, amount)
    }

    fn build(
        kind: TransactionKind,
        category: String,
        amount: Decimal,
        meta: EntityMeta<TransactionId>,
    ) -> Result<Self, LedgerError> {
        require_text(&category, "Category")?;
        require_positive(amount, "Amount")?;

        Ok(Self {
            meta,
            amount,
            category,
            kind,
        })
    }

    /// Transaction ID.
    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.meta.id
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.meta.created_at
    }

    /// Unsigned amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount as it affects the balance: positive for income, negative for expense.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Income or expense.
    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Returns true for income.
    #[must_use]
    pub const fn is_income(&self) -> bool {
        self.kind.is_income()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn noon(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_income_and_expense() {
        let income = Transaction::income("salary", dec!(3000)).unwrap();
        assert!(income.is_income());
        assert_eq!(income.signed_amount(), dec!(3000));

        let expense = Transaction::expense("food", dec!(30)).unwrap();
        assert!(!expense.is_income());
        assert_eq!(expense.kind(), TransactionKind::Expense);
        assert_eq!(expense.signed_amount(), dec!(-30));
    }

    #[test]
    fn test_rejects_blank_category() {
        let result = Transaction::income("  ", dec!(1));
        assert!(matches!(result, Err(LedgerError::EmptyField { .. })));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            Transaction::expense("food", dec!(0)),
            Err(LedgerError::NonPositiveAmount { .. })
        ));
        assert!(Transaction::expense("food", dec!(-1)).is_err());
    }

    #[test]
    fn test_new_at_keeps_timestamp() {
        let tx = Transaction::new_at(TransactionKind::Income, "gift", dec!(5), noon(3)).unwrap();
        assert_eq!(tx.created_at(), noon(3));
    }

    #[test]
    fn test_serializes_kind_as_flag() {
        let tx = Transaction::new_at(TransactionKind::Expense, "taxi", dec!(12.5), noon(1)).unwrap();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["is_income"], serde_json::Value::Bool(false));
        assert_eq!(json["category"], "taxi");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }
}

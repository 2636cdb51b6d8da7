//! Ledger operations that append to wallets.

use rust_decimal::Decimal;
use tally_shared::types::TransactionId;

use super::error::LedgerError;
use super::transaction::{Transaction, TransactionKind};
use super::validation::require_positive;
use super::wallet::Wallet;
use crate::auth::User;

/// Category prefix of the expense side of a transfer.
pub const TRANSFER_TO_PREFIX: &str = "Transfer to ";
/// Category prefix of the income side of a transfer.
pub const TRANSFER_FROM_PREFIX: &str = "Transfer from ";

/// Ledger service: every balance change goes through here or through
/// [`Wallet::record_transaction`] directly.
pub struct LedgerService;

impl LedgerService {
    /// Records an income transaction.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank category or a non-positive amount.
    pub fn add_income(
        wallet: &mut Wallet,
        category: &str,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        Self::record(wallet, TransactionKind::Income, category, amount)
    }

    /// Records an expense transaction, counting it against the category budget if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank category or a non-positive amount.
    pub fn add_expense(
        wallet: &mut Wallet,
        category: &str,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        Self::record(wallet, TransactionKind::Expense, category, amount)
    }

    fn record(
        wallet: &mut Wallet,
        kind: TransactionKind,
        category: &str,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        let tx = Transaction::new(kind, category, amount)?;
        let id = tx.id();
        wallet.record_transaction(tx);
        Ok(id)
    }

    /// Moves `amount` from one user to another.
    ///
    /// The sender gets an expense in `"Transfer to <recipient>"`, the
    /// recipient an income in `"Transfer from <sender>"`. Both transactions
    /// are built before either wallet is touched.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NonPositiveAmount` unless `amount > 0` and
    /// `LedgerError::SelfTransfer` when both sides are the same user.
    pub fn transfer(from: &mut User, to: &mut User, amount: Decimal) -> Result<(), LedgerError> {
        require_positive(amount, "Amount")?;
        if from == to {
            return Err(LedgerError::SelfTransfer);
        }

        let outgoing = Transaction::expense(format!("{TRANSFER_TO_PREFIX}{}", to.login()), amount)?;
        let incoming =
            Transaction::income(format!("{TRANSFER_FROM_PREFIX}{}", from.login()), amount)?;

        from.wallet_mut().record_transaction(outgoing);
        to.wallet_mut().record_transaction(incoming);
        Ok(())
    }
}

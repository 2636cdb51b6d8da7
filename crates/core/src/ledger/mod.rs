//! Ledger entities and the operations that append to them.
//!
//! A [`Wallet`] owns its transaction history and budgets. Its balance is the
//! signed sum of the history and only changes through
//! [`Wallet::record_transaction`].

pub mod error;
pub mod service;
pub mod transaction;
pub mod validation;
pub mod wallet;

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;

pub use error::{ErrorKind, LedgerError};
pub use service::{LedgerService, TRANSFER_FROM_PREFIX, TRANSFER_TO_PREFIX};
pub use transaction::{Transaction, TransactionKind};
pub use wallet::Wallet;

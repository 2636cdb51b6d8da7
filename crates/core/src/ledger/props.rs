//! Property-based tests for the wallet balance.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::transaction::{Transaction, TransactionKind};
use super::wallet::Wallet;

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Income), Just(TransactionKind::Expense)]
}

proptest! {
    /// Balance equals the signed sum of the history after every append.
    #[test]
    fn prop_balance_matches_history(
        txs in prop::collection::vec(
            (kind_strategy(), prop_oneof![Just("food"), Just("salary")], positive_amount()),
            0..60,
        )
    ) {
        let mut wallet = Wallet::new(UserId::new());
        let mut expected = Decimal::ZERO;

        for (kind, category, amount) in txs {
            expected += match kind {
                TransactionKind::Income => amount,
                TransactionKind::Expense => -amount,
            };
            wallet.record_transaction(Transaction::new(kind, category, amount).unwrap());

            prop_assert_eq!(wallet.balance(), expected);
            prop_assert_eq!(wallet.balance(), wallet.recomputed_balance());
        }
    }

    /// Constructors never accept a non-positive amount.
    #[test]
    fn prop_non_positive_amount_rejected(cents in -1_000_000i64..=0, kind in kind_strategy()) {
        let amount = Decimal::new(cents, 2);
        prop_assert!(Transaction::new(kind, "food", amount).is_err());
    }
}

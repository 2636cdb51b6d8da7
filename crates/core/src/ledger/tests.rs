//! Tests for wallets and ledger operations.

use rust_decimal_macros::dec;
use tally_shared::types::UserId;

use super::*;
use crate::auth::User;
use crate::budget::BudgetService;

#[test]
fn test_new_wallet_is_empty() {
    let owner = UserId::new();
    let wallet = Wallet::new(owner);
    assert_eq!(wallet.id().into_inner(), owner.into_inner());
    assert!(wallet.balance().is_zero());
    assert!(wallet.transactions().is_empty());
    assert!(wallet.budgets().is_empty());
}

#[test]
fn test_record_keeps_order_and_balance() {
    let mut wallet = Wallet::new(UserId::new());
    wallet.record_transaction(Transaction::income("salary", dec!(3000)).unwrap());
    wallet.record_transaction(Transaction::expense("food", dec!(30)).unwrap());
    wallet.record_transaction(Transaction::expense("food", dec!(30)).unwrap());

    assert_eq!(wallet.balance(), dec!(2940));
    assert_eq!(wallet.recomputed_balance(), dec!(2940));

    let categories: Vec<&str> = wallet.transactions().iter().map(Transaction::category).collect();
    assert_eq!(categories, ["salary", "food", "food"]);
}

#[test]
fn test_expense_without_budget_is_untracked() {
    let mut wallet = Wallet::new(UserId::new());
    BudgetService::set_budget(&mut wallet, "food", dec!(100)).unwrap();
    wallet.record_transaction(Transaction::expense("rent", dec!(500)).unwrap());

    assert_eq!(wallet.budget("food").unwrap().spent(), dec!(0));
    assert_eq!(wallet.balance(), dec!(-500));
}

#[test]
fn test_income_never_counts_against_budget() {
    let mut wallet = Wallet::new(UserId::new());
    BudgetService::set_budget(&mut wallet, "food", dec!(100)).unwrap();
    wallet.record_transaction(Transaction::income("food", dec!(40)).unwrap());

    assert_eq!(wallet.budget("food").unwrap().spent(), dec!(0));
}

#[test]
fn test_add_income_and_expense_validate() {
    let mut wallet = Wallet::new(UserId::new());

    let err = LedgerService::add_income(&mut wallet, "", dec!(10)).unwrap_err();
    assert!(err.is_validation());
    let err = LedgerService::add_expense(&mut wallet, "food", dec!(-1)).unwrap_err();
    assert!(err.is_validation());

    assert!(wallet.transactions().is_empty());

    let id = LedgerService::add_expense(&mut wallet, "food", dec!(12.34)).unwrap();
    assert_eq!(wallet.transactions()[0].id(), id);
    assert_eq!(wallet.balance(), dec!(-12.34));
}

#[test]
fn test_transfer() {
    let mut alice = User::new("alice", "hash".into());
    let mut bob = User::new("bob", "hash".into());
    LedgerService::add_income(alice.wallet_mut(), "salary", dec!(3000)).unwrap();

    LedgerService::transfer(&mut alice, &mut bob, dec!(300)).unwrap();

    assert_eq!(alice.wallet().balance(), dec!(2700));
    assert_eq!(bob.wallet().balance(), dec!(300));

    let sent = &alice.wallet().transactions()[1];
    assert_eq!(sent.category(), "Transfer to bob");
    assert_eq!(sent.kind(), TransactionKind::Expense);

    let received = &bob.wallet().transactions()[0];
    assert_eq!(received.category(), "Transfer from alice");
    assert!(received.is_income());
}

#[test]
fn test_transfer_to_self_rejected() {
    let mut alice = User::new("alice", "hash".into());
    let mut twin = alice.clone();
    LedgerService::add_income(alice.wallet_mut(), "salary", dec!(3000)).unwrap();

    let err = LedgerService::transfer(&mut alice, &mut twin, dec!(300)).unwrap_err();
    assert_eq!(err, LedgerError::SelfTransfer);
    assert!(err.is_validation());
    assert_eq!(alice.wallet().balance(), dec!(3000));
}

#[test]
fn test_transfer_rejects_non_positive_amount() {
    let mut alice = User::new("alice", "hash".into());
    let mut bob = User::new("bob", "hash".into());

    let err = LedgerService::transfer(&mut alice, &mut bob, dec!(0)).unwrap_err();
    assert!(matches!(err, LedgerError::NonPositiveAmount { .. }));
    assert!(alice.wallet().transactions().is_empty());
    assert!(bob.wallet().transactions().is_empty());
}

#[test]
fn test_wallet_json_shape() {
    let mut wallet = Wallet::new(UserId::new());
    BudgetService::set_budget(&mut wallet, "food", dec!(300)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(30)).unwrap();

    let json = serde_json::to_value(&wallet).unwrap();
    assert!(json["transactions"].is_array());
    assert_eq!(json["transactions"][0]["is_income"], false);
    assert_eq!(json["budgets"][0]["category"], "food");

    let back: Wallet = serde_json::from_value(json).unwrap();
    assert_eq!(back, wallet);
}

#[test]
fn test_stored_transaction_is_validated() {
    let tx = Transaction::income("salary", dec!(100)).unwrap();
    let json = serde_json::to_value(&tx).unwrap();
    assert_eq!(serde_json::from_value::<Transaction>(json.clone()).unwrap(), tx);

    let mut negative = json.clone();
    negative["amount"] = serde_json::json!("-5");
    assert!(serde_json::from_value::<Transaction>(negative).is_err());

    let mut blank = json;
    blank["category"] = serde_json::json!("");
    assert!(serde_json::from_value::<Transaction>(blank).is_err());
}

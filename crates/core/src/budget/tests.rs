//! Unit and property-based tests for budget tracking.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_shared::types::UserId;

use super::service::BudgetService;
use super::types::{Budget, BudgetBook};
use crate::ledger::{LedgerError, LedgerService, Transaction, Wallet};

fn wallet_with_salary() -> Wallet {
    let mut wallet = Wallet::new(UserId::new());
    LedgerService::add_income(&mut wallet, "salary", dec!(3000)).unwrap();
    wallet
}

#[test]
fn test_budget_tracks_matching_expenses() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "food", dec!(300)).unwrap();

    LedgerService::add_expense(&mut wallet, "food", dec!(30)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(30)).unwrap();
    LedgerService::add_expense(&mut wallet, "rent", dec!(1000)).unwrap();

    let food = wallet.budget("food").unwrap();
    assert_eq!(food.spent(), dec!(60));
    assert_eq!(food.remaining(), dec!(240));
    assert_eq!(wallet.balance(), dec!(1940));
    assert!(wallet.budget("rent").is_none());
}

#[test]
fn test_exceeded_budget() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "taxi", dec!(30)).unwrap();
    LedgerService::add_expense(&mut wallet, "taxi", dec!(300)).unwrap();

    let taxi = wallet.budget("taxi").unwrap();
    assert!(taxi.is_exceeded());
    assert_eq!(taxi.remaining(), dec!(-270));
    assert_eq!(BudgetService::remaining(&wallet, "taxi"), dec!(-270));
}

#[test]
fn test_set_budget_seeds_from_history() {
    let mut wallet = wallet_with_salary();
    LedgerService::add_expense(&mut wallet, "food", dec!(45.50)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(4.50)).unwrap();
    LedgerService::add_income(&mut wallet, "food", dec!(100)).unwrap();

    BudgetService::set_budget(&mut wallet, "food", dec!(200)).unwrap();
    assert_eq!(wallet.budget("food").unwrap().spent(), dec!(50));
}

#[test]
fn test_set_budget_overwrites() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "food", dec!(300)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(10)).unwrap();
    BudgetService::set_budget(&mut wallet, "food", dec!(50)).unwrap();

    let food = wallet.budget("food").unwrap();
    assert_eq!(food.limit(), dec!(50));
    assert_eq!(food.spent(), dec!(10));
    assert_eq!(wallet.budgets().len(), 1);
}

#[rstest]
#[case("", dec!(100))]
#[case("   ", dec!(100))]
#[case("food", dec!(0))]
#[case("food", dec!(-5))]
fn test_set_budget_validation(#[case] category: &str, #[case] limit: Decimal) {
    let mut wallet = wallet_with_salary();
    let err = BudgetService::set_budget(&mut wallet, category, limit).unwrap_err();
    assert!(err.is_validation());
    assert!(wallet.budgets().is_empty());
}

#[test]
fn test_update_limit_keeps_spent() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "food", dec!(100)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(40)).unwrap();

    BudgetService::update_budget_limit(&mut wallet, "food", dec!(500)).unwrap();
    let food = wallet.budget("food").unwrap();
    assert_eq!(food.limit(), dec!(500));
    assert_eq!(food.spent(), dec!(40));

    let err = BudgetService::update_budget_limit(&mut wallet, "fun", dec!(10)).unwrap_err();
    assert_eq!(err, LedgerError::BudgetNotFound("fun".into()));
    assert!(err.is_not_found());

    assert!(BudgetService::update_budget_limit(&mut wallet, "food", dec!(0)).is_err());
}

#[test]
fn test_rename_moves_budget() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "food", dec!(300)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(30)).unwrap();

    let displaced = BudgetService::rename_budget_category(&mut wallet, "food", "groceries").unwrap();
    assert!(displaced.is_none());
    assert!(wallet.budget("food").is_none());

    let groceries = wallet.budget("groceries").unwrap();
    assert_eq!(groceries.limit(), dec!(300));
    assert_eq!(groceries.spent(), dec!(30));

    // Expenses now count under the new name only.
    LedgerService::add_expense(&mut wallet, "groceries", dec!(5)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(5)).unwrap();
    assert_eq!(wallet.budget("groceries").unwrap().spent(), dec!(35));
}

#[test]
fn test_rename_collision_returns_displaced() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "food", dec!(300)).unwrap();
    BudgetService::set_budget(&mut wallet, "cafe", dec!(50)).unwrap();

    let displaced = BudgetService::rename_budget_category(&mut wallet, "food", "cafe")
        .unwrap()
        .unwrap();
    assert_eq!(displaced.limit(), dec!(50));
    assert_eq!(wallet.budgets().len(), 1);
    assert_eq!(wallet.budget("cafe").unwrap().limit(), dec!(300));
}

#[test]
fn test_rename_to_same_name_keeps_order() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "a", dec!(10)).unwrap();
    BudgetService::set_budget(&mut wallet, "b", dec!(20)).unwrap();
    let before = wallet.budget("a").unwrap().clone();

    let displaced = BudgetService::rename_budget_category(&mut wallet, "a", "a").unwrap();
    assert!(displaced.is_none());

    let order: Vec<&str> = wallet.budgets().iter().map(Budget::category).collect();
    assert_eq!(order, ["a", "b"]);
    assert_eq!(wallet.budget("a").unwrap(), &before);
}

#[test]
fn test_tiny_limit_usage_saturates() {
    let mut wallet = wallet_with_salary();
    BudgetService::set_budget(&mut wallet, "food", Decimal::new(1, 28)).unwrap();
    LedgerService::add_expense(&mut wallet, "food", dec!(1)).unwrap();

    let food = wallet.budget("food").unwrap();
    assert_eq!(food.usage_percentage(), Decimal::MAX);
    assert!(food.is_exceeded());
}

#[test]
fn test_rename_errors() {
    let mut wallet = wallet_with_salary();
    let err = BudgetService::rename_budget_category(&mut wallet, "food", "x").unwrap_err();
    assert!(err.is_not_found());

    BudgetService::set_budget(&mut wallet, "food", dec!(1)).unwrap();
    let err = BudgetService::rename_budget_category(&mut wallet, "food", " ").unwrap_err();
    assert!(err.is_validation());
    assert!(wallet.budget("food").is_some());
}

#[test]
fn test_remaining_without_budget_is_zero() {
    let wallet = wallet_with_salary();
    assert_eq!(BudgetService::remaining(&wallet, "food"), Decimal::ZERO);
}

#[rstest]
#[case(dec!(0), dec!(0), dec!(0))]
#[case(dec!(0), dec!(50), dec!(0))]
#[case(dec!(200), dec!(50), dec!(25))]
#[case(dec!(100), dec!(150), dec!(150))]
fn test_usage_percentage(#[case] limit: Decimal, #[case] spent: Decimal, #[case] expected: Decimal) {
    let budget = Budget::new("food", limit).unwrap().with_spent(spent);
    assert_eq!(budget.usage_percentage(), expected);
}

#[test]
fn test_set_limit_rejects_negative() {
    let mut budget = Budget::new("food", dec!(10)).unwrap();
    assert_eq!(
        budget.set_limit(dec!(-1)),
        Err(LedgerError::NegativeLimit(dec!(-1)))
    );
    assert_eq!(budget.limit(), dec!(10));
    budget.set_limit(dec!(0)).unwrap();
    assert_eq!(budget.limit(), dec!(0));
}

#[test]
fn test_book_keeps_insertion_order() {
    let mut book = BudgetBook::new();
    book.insert(Budget::new("b", dec!(1)).unwrap());
    book.insert(Budget::new("a", dec!(2)).unwrap());
    book.insert(Budget::new("c", dec!(3)).unwrap());

    let replaced = book.insert(Budget::new("a", dec!(20)).unwrap());
    assert_eq!(replaced.map(|b| b.limit()), Some(dec!(2)));

    let order: Vec<&str> = book.iter().map(Budget::category).collect();
    assert_eq!(order, ["b", "a", "c"]);

    book.remove("b");
    let order: Vec<&str> = book.iter().map(Budget::category).collect();
    assert_eq!(order, ["a", "c"]);
}

#[test]
fn test_book_serializes_as_list() {
    let mut book = BudgetBook::new();
    book.insert(Budget::new("food", dec!(300)).unwrap().with_spent(dec!(60)));

    let json = serde_json::to_value(&book).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["category"], "food");

    let back: BudgetBook = serde_json::from_value(json).unwrap();
    assert_eq!(back, book);
}

#[test]
fn test_deserialize_rejects_negative_limit() {
    let json = serde_json::json!({
        "id": "0190a3d4-0000-7000-8000-000000000000",
        "created_at": "2024-01-01T00:00:00",
        "category": "food",
        "limit": "-1",
        "spent": "0"
    });
    assert!(serde_json::from_value::<Budget>(json).is_err());
}

/// Strategy for amounts from 0.01 to 10,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// Constructing a budget with a negative limit always fails.
    #[test]
    fn prop_negative_limit_rejected(cents in i64::MIN / 2..0i64) {
        let limit = Decimal::new(cents, 2);
        prop_assert_eq!(Budget::new("food", limit), Err(LedgerError::NegativeLimit(limit)));
    }

    /// `spent` never decreases as transactions are recorded.
    #[test]
    fn prop_spent_is_monotonic(
        txs in prop::collection::vec(
            (any::<bool>(), prop_oneof![Just("food"), Just("rent")], positive_amount()),
            0..40,
        )
    ) {
        let mut wallet = Wallet::new(UserId::new());
        BudgetService::set_budget(&mut wallet, "food", dec!(100)).unwrap();

        let mut last = Decimal::ZERO;
        let mut expected = Decimal::ZERO;
        for (is_income, category, amount) in txs {
            let tx = if is_income {
                Transaction::income(category, amount).unwrap()
            } else {
                Transaction::expense(category, amount).unwrap()
            };
            if !is_income && category == "food" {
                expected += amount;
            }
            wallet.record_transaction(tx);

            let spent = wallet.budget("food").unwrap().spent();
            prop_assert!(spent >= last);
            last = spent;
        }
        prop_assert_eq!(last, expected);
    }
}

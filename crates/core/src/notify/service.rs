//! Notification scan over a wallet.

use rust_decimal::Decimal;

use super::types::{Notification, NotificationThresholds};
use crate::ledger::Wallet;
use crate::stats::StatisticsService;

/// Stateless notification scanner.
pub struct NotificationService;

impl NotificationService {
    /// Scans `wallet` and returns every advisory that applies.
    ///
    /// Budget notices come first in budget order, then balance notices,
    /// then the income/expense comparison.
    #[must_use]
    pub fn check(wallet: &Wallet, thresholds: &NotificationThresholds) -> Vec<Notification> {
        let mut notifications = Vec::new();
        Self::check_budgets(wallet, thresholds, &mut notifications);
        Self::check_balance(wallet, thresholds, &mut notifications);
        Self::check_health(wallet, &mut notifications);
        notifications
    }

    /// [`check`](Self::check) rendered as display strings.
    #[must_use]
    pub fn messages(wallet: &Wallet, thresholds: &NotificationThresholds) -> Vec<String> {
        Self::check(wallet, thresholds)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn check_budgets(wallet: &Wallet, thresholds: &NotificationThresholds, out: &mut Vec<Notification>) {
        for budget in wallet.budgets() {
            let usage = budget.usage_percentage();
            if usage >= thresholds.near_limit_percent && usage < Decimal::ONE_HUNDRED {
                out.push(Notification::BudgetNearLimit {
                    category: budget.category().to_owned(),
                    usage_percentage: usage,
                    remaining: budget.remaining(),
                });
            }
            if budget.is_exceeded() {
                out.push(Notification::BudgetExceeded {
                    category: budget.category().to_owned(),
                    overspend: budget.remaining().abs(),
                });
            }
        }
    }

    fn check_balance(wallet: &Wallet, thresholds: &NotificationThresholds, out: &mut Vec<Notification>) {
        let balance = wallet.balance();
        if balance.is_zero() {
            out.push(Notification::ZeroBalance);
        }
        if balance < Decimal::ZERO {
            out.push(Notification::NegativeBalance { balance });
        }

        let income = StatisticsService::total_income(wallet);
        let percent = thresholds.low_balance_percent;
        let floor = income
            .checked_mul(percent)
            .map(|scaled| scaled / Decimal::ONE_HUNDRED)
            .or_else(|| (income / Decimal::ONE_HUNDRED).checked_mul(percent))
            .unwrap_or(Decimal::MAX);
        if income > Decimal::ZERO && balance < floor {
            out.push(Notification::LowBalance {
                balance,
                threshold_percent: thresholds.low_balance_percent,
            });
        }
    }

    fn check_health(wallet: &Wallet, out: &mut Vec<Notification>) {
        let income = StatisticsService::total_income(wallet);
        let expense = StatisticsService::total_expense(wallet);
        if expense > income {
            out.push(Notification::ExpensesExceedIncome {
                difference: expense - income,
            });
        }
    }
}

//! Aggregation over wallet history.
//!
//! Every operation is a [`TransactionQuery`](crate::query::TransactionQuery)
//! applied through either [`StatisticsService::total`] or
//! [`StatisticsService::group_by_category`].

pub mod service;
pub mod types;


pub use service::StatisticsService;
pub use types::{BudgetStatus, WalletSummary};

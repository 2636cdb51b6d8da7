//! Budget tracking: per-category spending limits kept in sync with expenses.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::BudgetService;
pub use types::{Budget, BudgetBook};

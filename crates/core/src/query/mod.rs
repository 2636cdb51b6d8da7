//! Transaction queries: composable filters over category, kind and period.

pub mod filter;
pub mod period;

pub use filter::TransactionQuery;
pub use period::{DATE_FORMAT, DateRange, parse_date};

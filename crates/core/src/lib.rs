//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO file or network dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Wallets, transactions and the operations that append to them
//! - `budget` - Per-category spending limits
//! - `query` - Composable transaction filters
//! - `stats` - Totals and category breakdowns
//! - `notify` - Threshold notifications
//! - `auth` - Users, password hashing and the login session
//! - `report` - CSV wallet reports

pub mod auth;
pub mod budget;
pub mod ledger;
pub mod notify;
pub mod query;
pub mod report;
pub mod stats;

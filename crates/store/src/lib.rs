//! File-backed persistence for Tally.
//!
//! This crate provides:
//! - [`JsonUserRepository`], the whole-state JSON implementation of
//!   [`UserRepository`](tally_core::auth::UserRepository)
//! - CSV report files

pub mod error;
pub mod reports;
pub mod users;

pub use error::StoreError;
pub use reports::{write_report, write_report_to};
pub use users::JsonUserRepository;

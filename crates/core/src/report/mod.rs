//! Wallet reports.
//!
//! Rendering only: the report is built in memory and handed back as text.
//! Writing it to disk is the caller's concern.

pub mod error;
pub mod service;


pub use error::ReportError;
pub use service::{REPORT_HEADER, ReportService, report_file_name};

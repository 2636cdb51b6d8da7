//! Report files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tally_core::ledger::Wallet;
use tally_core::report::{ReportService, report_file_name};
use tracing::info;

use crate::error::StoreError;

/// Writes a report into `dir` under a timestamped file name and returns its path.
///
/// # Errors
///
/// Returns `StoreError` if rendering or writing fails.
pub fn write_report(wallet: &Wallet, dir: &Path, now: NaiveDateTime) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    let path = dir.join(report_file_name(now));
    write_report_to(wallet, &path, now)?;
    Ok(path)
}

/// Writes a report to exactly `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `StoreError` if rendering or writing fails.
pub fn write_report_to(wallet: &Wallet, path: &Path, now: NaiveDateTime) -> Result<(), StoreError> {
    let csv = ReportService::render_csv(wallet, now)?;
    fs::write(path, csv).map_err(|e| StoreError::io(path, e))?;
    info!(
        path = %path.display(),
        transactions = wallet.transactions().len(),
        "Report written"
    );
    Ok(())
}

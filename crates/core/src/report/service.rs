//! CSV rendering of a wallet's history.

use chrono::NaiveDateTime;
use csv::{Terminator, WriterBuilder};
use tally_shared::types::format_amount;

use super::error::ReportError;
use crate::ledger::{TransactionKind, Wallet};

/// Column header row.
pub const REPORT_HEADER: [&str; 4] = ["Type", "Category", "Amount", "Date"];

/// Title line prefix, followed by the generation timestamp.
const TITLE_PREFIX: &str = "Wallet report";

/// Timestamp format used in the title and the date column.
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Timestamp format used in report file names.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Report service.
pub struct ReportService;

impl ReportService {
    /// Renders the wallet as CSV.
    ///
    /// Layout: a title line with `generated_at`, the [`REPORT_HEADER`] row,
    /// then one row per transaction in history order.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the CSV writer fails.
    pub fn render_csv(wallet: &Wallet, generated_at: NaiveDateTime) -> Result<String, ReportError> {
        let mut csv = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        csv.write_record([format!(
            "{TITLE_PREFIX} {}",
            generated_at.format(TIMESTAMP_FORMAT)
        )])?;
        csv.write_record(REPORT_HEADER)?;

        for tx in wallet.transactions() {
            let amount = format_amount(tx.amount());
            let date = tx.created_at().format(TIMESTAMP_FORMAT).to_string();
            csv.write_record([
                kind_label(tx.kind()),
                tx.category(),
                amount.as_str(),
                date.as_str(),
            ])?;
        }

        let bytes = csv
            .into_inner()
            .map_err(|e| ReportError::Flush(e.error().to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

const fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Income",
        TransactionKind::Expense => "Expense",
    }
}

/// Default file name for a report generated at `now`.
#[must_use]
pub fn report_file_name(now: NaiveDateTime) -> String {
    format!("report_{}.csv", now.format(FILE_TIMESTAMP_FORMAT))
}

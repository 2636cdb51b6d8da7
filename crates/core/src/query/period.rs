//! Calendar date input for period filters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::ledger::LedgerError;

/// Input format for dates: `dd.mm.yyyy`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `dd.mm.yyyy` calendar date.
///
/// # Errors
///
/// Returns `LedgerError::InvalidDate` if `input` is not a valid date in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(input.to_owned()))
}

/// Inclusive span of whole days, from the first instant of `start` to the
/// last instant of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start of the first day.
    pub start: NaiveDateTime,
    /// Last instant of the final day.
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Range covering `start` through `end`, both days included.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDateRange` when `end` precedes `start`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidDateRange { start, end });
        }
        Ok(Self {
            start: start.and_time(NaiveTime::MIN),
            end: end_of_day(end),
        })
    }

    /// Parses two `dd.mm.yyyy` strings into a range.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` for an unparsable date and
    /// `LedgerError::InvalidDateRange` when `to` precedes `from`.
    pub fn parse(from: &str, to: &str) -> Result<Self, LedgerError> {
        Self::from_dates(parse_date(from)?, parse_date(to)?)
    }

    /// Returns true if `instant` falls inside the range.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.succ_opt().map_or(NaiveDateTime::MAX, |next| {
        next.and_time(NaiveTime::MIN) - TimeDelta::nanoseconds(1)
    })
}

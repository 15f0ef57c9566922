//! Statutory due dates for the DARF and GPS payments.
//!
//! The DARF for a month is due on the last business day of the following
//! month; the GPS on the 15th of the following month, postponed past
//! weekends. Only weekends are adjusted; the public-holiday calendar is
//! deliberately not consulted.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fiscal_core::calculations::{darf_due_date, gps_due_date};
//!
//! // December 2024 rolls into January 2025.
//! let darf = darf_due_date(11, 2024).unwrap();
//! assert_eq!(darf, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
//!
//! let gps = gps_due_date(0, 2024).unwrap();
//! assert_eq!(gps, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
//! ```

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use thiserror::Error;

use crate::format::date_br;

/// Errors raised when a due date cannot be computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DueDateError {
    /// Months are 0-based: January = 0, December = 11.
    #[error("month index out of range: {0} (expected 0 through 11)")]
    InvalidMonth(u32),

    /// The date falls outside the supported calendar range.
    #[error("due date out of calendar range for year {0}")]
    YearOutOfRange(i32),
}

/// First day of the month following a 0-based (month, year) pair, rolling
/// December into January of the next year.
fn first_of_following_month(
    month0: u32,
    year: i32,
) -> Result<NaiveDate, DueDateError> {
    if month0 > 11 {
        return Err(DueDateError::InvalidMonth(month0));
    }
    let (month0, year) = if month0 == 11 {
        (0, year + 1)
    } else {
        (month0 + 1, year)
    };
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(DueDateError::YearOutOfRange(year))
}

/// Saturdays move back one day, Sundays two, both landing on Friday.
fn shift_back_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date - Duration::days(2),
        _ => date,
    }
}

/// Saturdays move forward two days, Sundays one, both landing on Monday.
fn shift_forward_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// DARF due date for a record's month: the last calendar day of the
/// following month, shifted back off weekends.
///
/// # Errors
///
/// Returns [`DueDateError::InvalidMonth`] for `month0 > 11`.
pub fn darf_due_date(
    month0: u32,
    year: i32,
) -> Result<NaiveDate, DueDateError> {
    let first = first_of_following_month(month0, year)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(DueDateError::YearOutOfRange(first.year()))?;
    Ok(shift_back_off_weekend(next - Duration::days(1)))
}

/// GPS due date for a record's month: the 15th of the following month,
/// shifted forward off weekends.
///
/// # Errors
///
/// Returns [`DueDateError::InvalidMonth`] for `month0 > 11`.
pub fn gps_due_date(
    month0: u32,
    year: i32,
) -> Result<NaiveDate, DueDateError> {
    let first = first_of_following_month(month0, year)?;
    Ok(shift_forward_off_weekend(first + Duration::days(14)))
}

/// [`darf_due_date`] formatted for display (dd/mm/yyyy).
pub fn darf_due_date_br(
    month0: u32,
    year: i32,
) -> Result<String, DueDateError> {
    Ok(date_br(darf_due_date(month0, year)?))
}

/// [`gps_due_date`] formatted for display (dd/mm/yyyy).
pub fn gps_due_date_br(
    month0: u32,
    year: i32,
) -> Result<String, DueDateError> {
    Ok(date_br(gps_due_date(month0, year)?))
}

//! Calendar-day arithmetic helpers.

use chrono::{Datelike, Duration, NaiveDate};

use super::range::DateRange;

/// Parses an ISO `YYYY-MM-DD` string into a date.
///
/// A trailing `T...` time component is ignored. Parsing goes through the
/// individual year/month/day components, never through a UTC-based
/// constructor.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split('T').next()?;
    let mut parts = date_part.split('-');

    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a date as an ISO `YYYY-MM-DD` string.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Adds a (possibly negative) number of days to a date.
///
/// Saturates at the calendar boundaries instead of overflowing.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Adds a (possibly negative) number of months, clamping the day of month
/// to the length of the target month (Jan 31 + 1 month = Feb 28/29).
#[must_use]
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) + 1;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (year, month) = (year as i32, month as u32);
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Returns the number of days in the given month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(30, |last| last.day())
}

/// Returns the inclusive range covering a calendar month, or `None` for an
/// invalid year/month.
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    Some(DateRange::new(start, end))
}

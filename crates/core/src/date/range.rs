//! Inclusive date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// Callers may legitimately construct a range with `end < start` from
/// unvalidated UI state; such a range is empty, contains nothing, and
/// enumerates nothing. It is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range, inclusive.
    pub start: NaiveDate,
    /// Last day of the range, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a single-day range.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns true if the range covers no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Enumerates the days of the range in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let mut next = if self.is_empty() { None } else { Some(self.start) };
        let end = self.end;

        std::iter::from_fn(move || {
            let current = next?;
            next = (current < end).then(|| current.succ_opt()).flatten();
            Some(current)
        })
    }
}

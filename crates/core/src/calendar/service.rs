//! Month grid construction.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use fluxo_shared::types::Snapshot;

use super::types::{CalendarDay, GRID_CELLS, MonthGrid};
use crate::date::{DateRange, add_days};
use crate::event::{EventClassifier, EventKind, FinancialEvent};

/// Service that builds month grids for agenda rendering.
///
/// Owns only grid-shape computation (first weekday offset, 42-cell
/// padding) and per-day sorting; event content comes entirely from the
/// classifier.
pub struct CalendarService;

impl CalendarService {
    /// Builds the Sunday-first grid for a month, padded with leading and
    /// trailing days from the adjacent months to exactly 42 cells.
    ///
    /// Each cell carries the day's agenda events (`Calendar` entries plus
    /// `Pending` due items), sorted by amount descending. An invalid
    /// year/month yields an empty grid rather than an error.
    #[must_use]
    pub fn month_grid(
        classifier: &EventClassifier,
        snapshot: &Snapshot,
        year: i32,
        month: u32,
    ) -> MonthGrid {
        let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return MonthGrid {
                year,
                month,
                first_weekday: 0,
                days: Vec::new(),
            };
        };

        let first_weekday = first_of_month.weekday().num_days_from_sunday();
        let grid_start = add_days(first_of_month, -i64::from(first_weekday));
        let grid_end = add_days(grid_start, GRID_CELLS as i64 - 1);

        let mut by_day: HashMap<NaiveDate, Vec<FinancialEvent>> = HashMap::new();
        for event in classifier.classify(snapshot, &DateRange::new(grid_start, grid_end)) {
            if matches!(event.kind, EventKind::Calendar | EventKind::Pending) {
                by_day.entry(event.date).or_default().push(event);
            }
        }

        let days = (0..GRID_CELLS as i64)
            .map(|offset| {
                let date = add_days(grid_start, offset);
                let mut events = by_day.remove(&date).unwrap_or_default();
                events.sort_by(|a, b| b.amount.cmp(&a.amount));

                CalendarDay {
                    date,
                    in_month: date.year() == year && date.month() == month,
                    events,
                }
            })
            .collect();

        MonthGrid {
            year,
            month,
            first_weekday,
            days,
        }
    }
}

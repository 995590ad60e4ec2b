//! Calendar grid data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::FinancialEvent;

/// Number of cells in a month grid: 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

/// One cell of a month grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The cell's date.
    pub date: NaiveDate,
    /// False for leading/trailing cells from adjacent months.
    pub in_month: bool,
    /// The day's agenda events, sorted by amount descending.
    pub events: Vec<FinancialEvent>,
}

/// A Sunday-first month grid of exactly [`GRID_CELLS`] cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Displayed year.
    pub year: i32,
    /// Displayed month (1-12).
    pub month: u32,
    /// Weekday index of the 1st of the month (0 = Sunday).
    pub first_weekday: u32,
    /// The 42 cells, row by row.
    pub days: Vec<CalendarDay>,
}

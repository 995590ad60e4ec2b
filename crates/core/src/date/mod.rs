//! Date-only arithmetic.
//!
//! All dates in the system are calendar days with no time-of-day or
//! timezone component. ISO strings are parsed by splitting into
//! year/month/day components; parsing through a UTC-based constructor
//! would shift the apparent day in negative-offset locales.

pub mod math;
pub mod range;

pub use math::{
    add_days, add_months, days_in_month, format_iso_date, month_bounds, parse_iso_date,
};
pub use range::DateRange;

//! Period aggregation.
//!
//! Folds a classified event stream into summary totals, groupings by
//! category / payment method / day, and a newest-first event list for
//! dashboards and printable reports.

pub mod cache;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use cache::SummaryCache;
pub use service::PeriodAggregator;
pub use types::{CategoryTotal, DayTotal, PaymentMethodTotal, PeriodSummary, PeriodTotals};

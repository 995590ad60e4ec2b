//! Period aggregation service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{CategoryTotal, DayTotal, PaymentMethodTotal, PeriodSummary, PeriodTotals};
use crate::date::DateRange;
use crate::event::{EventCategory, EventKind, FinancialEvent};

/// Service for aggregating classified events into period summaries.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Aggregates an event stream over an inclusive date range.
    ///
    /// Events outside the range are ignored; an inverted range produces an
    /// empty summary with zero totals. All sums stay in `Decimal`.
    #[must_use]
    pub fn aggregate(
        events: &[FinancialEvent],
        start: NaiveDate,
        end: NaiveDate,
    ) -> PeriodSummary {
        let range = DateRange::new(start, end);
        let mut in_range: Vec<FinancialEvent> = events
            .iter()
            .filter(|event| range.contains(event.date))
            .cloned()
            .collect();

        let mut totals = PeriodTotals::default();
        let mut by_category: BTreeMap<EventCategory, Decimal> = BTreeMap::new();
        let mut by_method: BTreeMap<_, (Decimal, Decimal)> = BTreeMap::new();
        let mut by_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

        for event in &in_range {
            match event.kind {
                EventKind::Received => {
                    totals.received += event.amount;
                    *by_category.entry(event.category).or_default() += event.amount;
                    if let Some(kind) = event.metadata.payment_kind {
                        by_method.entry(kind).or_insert((Decimal::ZERO, Decimal::ZERO)).0 +=
                            event.amount;
                    }
                    by_day.entry(event.date).or_insert((Decimal::ZERO, Decimal::ZERO)).0 +=
                        event.amount;
                }
                EventKind::Paid => {
                    totals.paid += event.amount;
                    *by_category.entry(event.category).or_default() += event.amount;
                    if let Some(kind) = event.metadata.payment_kind {
                        by_method.entry(kind).or_insert((Decimal::ZERO, Decimal::ZERO)).1 +=
                            event.amount;
                    }
                    by_day.entry(event.date).or_insert((Decimal::ZERO, Decimal::ZERO)).1 +=
                        event.amount;
                }
                EventKind::Calendar => match event.category {
                    EventCategory::SaleRecorded => totals.sales += event.amount,
                    EventCategory::DebtRecorded => totals.debts += event.amount,
                    _ => {}
                },
                EventKind::Pending => {}
            }
        }

        totals.net_result = totals.received - totals.paid;

        let by_category = by_category
            .into_iter()
            .filter(|(_, total)| !total.is_zero())
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();

        let by_payment_method = by_method
            .into_iter()
            .map(|(kind, (inflow, outflow))| PaymentMethodTotal {
                kind,
                inflow,
                outflow,
            })
            .collect();

        let by_day = by_day
            .into_iter()
            .filter(|(_, (received, paid))| !received.is_zero() || !paid.is_zero())
            .map(|(date, (received, paid))| DayTotal {
                date,
                received,
                paid,
            })
            .collect();

        // Newest first for display; stable so same-day events keep their
        // classification order.
        in_range.sort_by(|a, b| b.date.cmp(&a.date));

        PeriodSummary {
            range,
            totals,
            by_category,
            by_payment_method,
            by_day,
            events: in_range,
        }
    }
}

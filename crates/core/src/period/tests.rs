//! Tests for period aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use fluxo_shared::types::PaymentKind;

use super::service::PeriodAggregator;
use crate::event::{EventCategory, EventKind, EventMetadata, FinancialEvent, SourceType};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn event(
    date: NaiveDate,
    kind: EventKind,
    category: EventCategory,
    amount: Decimal,
    payment_kind: Option<PaymentKind>,
) -> FinancialEvent {
    FinancialEvent {
        date,
        kind,
        category,
        amount,
        source_type: SourceType::Sale,
        source_id: Uuid::nil(),
        label: String::new(),
        metadata: EventMetadata {
            payment_kind,
            ..EventMetadata::default()
        },
    }
}

#[test]
fn test_totals() {
    let events = vec![
        event(
            ymd(2024, 3, 2),
            EventKind::Calendar,
            EventCategory::SaleRecorded,
            dec!(1000),
            None,
        ),
        event(
            ymd(2024, 3, 2),
            EventKind::Received,
            EventCategory::SalePayment,
            dec!(400),
            Some(PaymentKind::Cash),
        ),
        event(
            ymd(2024, 3, 5),
            EventKind::Calendar,
            EventCategory::DebtRecorded,
            dec!(300),
            None,
        ),
        event(
            ymd(2024, 3, 5),
            EventKind::Paid,
            EventCategory::DebtPayment,
            dec!(300),
            Some(PaymentKind::Pix),
        ),
        event(
            ymd(2024, 3, 9),
            EventKind::Pending,
            EventCategory::CheckPending,
            dec!(999),
            Some(PaymentKind::Check),
        ),
    ];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));

    assert_eq!(summary.totals.sales, dec!(1000));
    assert_eq!(summary.totals.debts, dec!(300));
    assert_eq!(summary.totals.received, dec!(400));
    assert_eq!(summary.totals.paid, dec!(300));
    assert_eq!(summary.totals.net_result, dec!(100));
}

#[test]
fn test_pending_excluded_from_cash_totals() {
    let events = vec![event(
        ymd(2024, 3, 9),
        EventKind::Pending,
        EventCategory::BoletoPending,
        dec!(500),
        Some(PaymentKind::Boleto),
    )];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));

    assert_eq!(summary.totals.received, Decimal::ZERO);
    assert_eq!(summary.totals.paid, Decimal::ZERO);
    assert!(summary.by_payment_method.is_empty());
    assert_eq!(summary.events.len(), 1);
}

#[test]
fn test_by_category_omits_zero_net() {
    let events = vec![
        event(
            ymd(2024, 3, 2),
            EventKind::Received,
            EventCategory::CheckCleared,
            dec!(250),
            Some(PaymentKind::Check),
        ),
        event(
            ymd(2024, 3, 3),
            EventKind::Received,
            EventCategory::SalePayment,
            Decimal::ZERO,
            Some(PaymentKind::Cash),
        ),
    ];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));

    assert_eq!(summary.by_category.len(), 1);
    assert_eq!(summary.by_category[0].category, EventCategory::CheckCleared);
    assert_eq!(summary.by_category[0].total, dec!(250));
}

#[test]
fn test_by_payment_method_keeps_one_sided_entries() {
    let events = vec![
        event(
            ymd(2024, 3, 2),
            EventKind::Received,
            EventCategory::SalePayment,
            dec!(120),
            Some(PaymentKind::Pix),
        ),
        event(
            ymd(2024, 3, 4),
            EventKind::Paid,
            EventCategory::OwnCheckPaid,
            dec!(80),
            Some(PaymentKind::Check),
        ),
    ];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));

    assert_eq!(summary.by_payment_method.len(), 2);

    let pix = summary
        .by_payment_method
        .iter()
        .find(|m| m.kind == PaymentKind::Pix)
        .unwrap();
    assert_eq!(pix.inflow, dec!(120));
    assert_eq!(pix.outflow, Decimal::ZERO);

    let check = summary
        .by_payment_method
        .iter()
        .find(|m| m.kind == PaymentKind::Check)
        .unwrap();
    assert_eq!(check.inflow, Decimal::ZERO);
    assert_eq!(check.outflow, dec!(80));
}

#[test]
fn test_by_day_chronological_and_events_newest_first() {
    let events = vec![
        event(
            ymd(2024, 3, 20),
            EventKind::Received,
            EventCategory::SalePayment,
            dec!(10),
            Some(PaymentKind::Cash),
        ),
        event(
            ymd(2024, 3, 5),
            EventKind::Received,
            EventCategory::SalePayment,
            dec!(20),
            Some(PaymentKind::Cash),
        ),
        event(
            ymd(2024, 3, 12),
            EventKind::Paid,
            EventCategory::Salary,
            dec!(30),
            None,
        ),
    ];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));

    let days: Vec<_> = summary.by_day.iter().map(|d| d.date).collect();
    assert_eq!(days, vec![ymd(2024, 3, 5), ymd(2024, 3, 12), ymd(2024, 3, 20)]);

    let event_dates: Vec<_> = summary.events.iter().map(|e| e.date).collect();
    assert_eq!(
        event_dates,
        vec![ymd(2024, 3, 20), ymd(2024, 3, 12), ymd(2024, 3, 5)]
    );
}

#[test]
fn test_events_outside_range_ignored() {
    let events = vec![
        event(
            ymd(2024, 2, 28),
            EventKind::Received,
            EventCategory::SalePayment,
            dec!(100),
            Some(PaymentKind::Cash),
        ),
        event(
            ymd(2024, 3, 10),
            EventKind::Received,
            EventCategory::SalePayment,
            dec!(40),
            Some(PaymentKind::Cash),
        ),
    ];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));

    assert_eq!(summary.totals.received, dec!(40));
    assert_eq!(summary.events.len(), 1);
}

#[test]
fn test_inverted_range_is_empty() {
    let events = vec![event(
        ymd(2024, 3, 10),
        EventKind::Received,
        EventCategory::SalePayment,
        dec!(40),
        Some(PaymentKind::Cash),
    )];

    let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 31), ymd(2024, 3, 1));

    assert_eq!(summary.totals, super::types::PeriodTotals::default());
    assert!(summary.events.is_empty());
    assert!(summary.by_day.is_empty());
}

proptest! {
    /// *For any* event stream, `net_result` equals `received - paid`.
    #[test]
    fn prop_net_result_identity(
        amounts in prop::collection::vec((-1_000_000i64..1_000_000, 0u8..3), 0..50),
    ) {
        let events: Vec<FinancialEvent> = amounts
            .into_iter()
            .map(|(cents, bucket)| {
                let (kind, category) = match bucket {
                    0 => (EventKind::Received, EventCategory::SalePayment),
                    1 => (EventKind::Paid, EventCategory::DebtPayment),
                    _ => (EventKind::Pending, EventCategory::CheckPending),
                };
                event(
                    ymd(2024, 3, 15),
                    kind,
                    category,
                    Decimal::new(cents, 2),
                    Some(PaymentKind::Cash),
                )
            })
            .collect();

        let summary = PeriodAggregator::aggregate(&events, ymd(2024, 3, 1), ymd(2024, 3, 31));
        prop_assert_eq!(
            summary.totals.net_result,
            summary.totals.received - summary.totals.paid
        );
    }
}

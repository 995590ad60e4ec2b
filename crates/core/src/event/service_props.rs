//! Property-based tests for event classification.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use fluxo_shared::types::{Check, CheckId, CheckStatus, PaymentMethod, Sale, SaleId, SaleStatus, Snapshot};

use super::service::EventClassifier;
use super::types::EventKind;
use crate::date::DateRange;

/// Strategy to generate decimal amounts, including zero and negatives.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate dates in a few-year window.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2022i32..2027, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid in every month")
    })
}

fn check_status() -> impl Strategy<Value = CheckStatus> {
    prop_oneof![
        Just(CheckStatus::Pending),
        Just(CheckStatus::Cleared),
        Just(CheckStatus::Returned),
        Just(CheckStatus::Represented),
    ]
}

fn any_check() -> impl Strategy<Value = Check> {
    (any_amount(), any_date(), check_status(), any::<bool>()).prop_map(
        |(value, due_date, status, own_check)| Check {
            id: CheckId::from_uuid(uuid::Uuid::nil()),
            sale_id: None,
            debt_id: None,
            client: "Client".to_string(),
            value,
            due_date,
            status,
            own_check,
            installment_number: None,
            total_installments: None,
            used_for: None,
            discount_date: None,
            anticipation: None,
        },
    )
}

fn any_sale() -> impl Strategy<Value = Sale> {
    (any_amount(), any_amount(), any_date()).prop_map(|(cash, pending, date)| Sale {
        id: SaleId::from_uuid(uuid::Uuid::nil()),
        client: "Client".to_string(),
        date,
        delivery_date: None,
        total_value: cash + pending,
        payment_methods: vec![PaymentMethod::Cash { amount: cash }],
        received_amount: cash,
        pending_amount: pending,
        status: SaleStatus::Partial,
        seller_id: None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* snapshot of checks and sales, classifying twice with the
    /// same inputs produces identical output: same events, same order.
    #[test]
    fn prop_classification_idempotent(
        checks in prop::collection::vec(any_check(), 0..10),
        sales in prop::collection::vec(any_sale(), 0..10),
        start in any_date(),
        end in any_date(),
    ) {
        let snapshot = Snapshot { checks, sales, ..Snapshot::default() };
        let range = DateRange::new(start, end);
        let classifier = EventClassifier::default();

        prop_assert_eq!(
            classifier.classify(&snapshot, &range),
            classifier.classify(&snapshot, &range)
        );
    }

    /// *For any* input, every classified event falls within the queried
    /// range.
    #[test]
    fn prop_events_stay_in_range(
        checks in prop::collection::vec(any_check(), 0..10),
        sales in prop::collection::vec(any_sale(), 0..10),
        start in any_date(),
        end in any_date(),
    ) {
        let snapshot = Snapshot { checks, sales, ..Snapshot::default() };
        let range = DateRange::new(start, end);

        for event in EventClassifier::default().classify(&snapshot, &range) {
            prop_assert!(range.contains(event.date));
        }
    }

    /// *For any* check that is not cleared and not anticipated, no
    /// `Received` or `Paid` event is produced from it.
    #[test]
    fn prop_uncleared_checks_never_move_cash(
        mut check in any_check(),
        start in any_date(),
        end in any_date(),
    ) {
        prop_assume!(check.status != CheckStatus::Cleared);
        check.anticipation = None;

        let snapshot = Snapshot { checks: vec![check], ..Snapshot::default() };
        let range = DateRange::new(start, end);

        for event in EventClassifier::default().classify(&snapshot, &range) {
            prop_assert!(event.kind != EventKind::Received);
            prop_assert!(event.kind != EventKind::Paid);
        }
    }
}

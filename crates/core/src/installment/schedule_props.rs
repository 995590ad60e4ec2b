//! Property-based tests for installment expansion.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use fluxo_shared::types::InstallmentPlan;

use super::schedule::{ExpansionOptions, expand_plan};
use crate::date::add_days;

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate valid anchor dates.
fn anchor_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid in every month")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* plan with N >= 1 installments, expansion returns exactly N
    /// installments with sequence numbers 1..N in order.
    #[test]
    fn prop_expansion_count_and_sequence(
        installments in 1u32..48,
        amount in positive_amount(),
        anchor in anchor_date(),
    ) {
        let plan = InstallmentPlan {
            installments,
            installment_value: Some(amount),
            interval_days: None,
            first_due_date: None,
            start_date: None,
        };

        let schedule = expand_plan(Some(&plan), amount, anchor, &ExpansionOptions::default());

        prop_assert_eq!(schedule.len() as u32, installments);
        for (index, installment) in schedule.iter().enumerate() {
            prop_assert_eq!(installment.sequence as usize, index + 1);
        }
    }

    /// *For any* plan, installment i is due `(i-1) * interval` days after
    /// the base date.
    #[test]
    fn prop_expansion_spacing(
        installments in 2u32..24,
        interval in 1i64..90,
        amount in positive_amount(),
        anchor in anchor_date(),
    ) {
        let plan = InstallmentPlan {
            installments,
            installment_value: Some(amount),
            interval_days: Some(interval),
            first_due_date: None,
            start_date: None,
        };

        let schedule = expand_plan(Some(&plan), amount, anchor, &ExpansionOptions::default());

        for installment in &schedule {
            let offset = i64::from(installment.sequence - 1) * interval;
            prop_assert_eq!(installment.due_date, add_days(anchor, offset));
        }
    }

    /// *For any* input, expansion never returns an empty schedule, even for
    /// a zero installment count.
    #[test]
    fn prop_expansion_never_empty(
        installments in 0u32..48,
        amount in positive_amount(),
        anchor in anchor_date(),
    ) {
        let plan = InstallmentPlan {
            installments,
            installment_value: None,
            interval_days: None,
            first_due_date: None,
            start_date: None,
        };

        let schedule = expand_plan(Some(&plan), amount, anchor, &ExpansionOptions::default());
        prop_assert!(!schedule.is_empty());
    }

    /// *For any* input, expanding twice yields identical schedules.
    #[test]
    fn prop_expansion_deterministic(
        installments in 0u32..48,
        interval in 1i64..90,
        amount in positive_amount(),
        anchor in anchor_date(),
    ) {
        let plan = InstallmentPlan {
            installments,
            installment_value: Some(amount),
            interval_days: Some(interval),
            first_due_date: None,
            start_date: None,
        };

        let first = expand_plan(Some(&plan), amount, anchor, &ExpansionOptions::default());
        let second = expand_plan(Some(&plan), amount, anchor, &ExpansionOptions::default());
        prop_assert_eq!(first, second);
    }
}

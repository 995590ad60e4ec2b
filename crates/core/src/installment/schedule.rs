//! Installment schedule computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fluxo_shared::config::EngineConfig;
use fluxo_shared::types::{InstallmentPlan, PaymentMethod};

use crate::date::add_days;

/// One scheduled portion of a multi-payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position within the schedule.
    pub sequence: u32,
    /// Due date.
    pub due_date: NaiveDate,
    /// Scheduled amount.
    pub amount: Decimal,
}

/// Fallback for the per-installment amount when a multi-installment plan
/// omits `installment_value`.
///
/// The upstream data is ambiguous here, so the choice is explicit:
/// `MethodTotal` repeats the method's full amount on every installment
/// (over-counting if summed), `Zero` makes unpriced installments
/// contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountFallback {
    /// Repeat the method's total amount on every installment.
    #[default]
    MethodTotal,
    /// Unpriced installments contribute nothing.
    Zero,
}

/// Options controlling plan expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionOptions {
    /// Spacing between installments when the plan does not specify one.
    pub default_interval_days: i64,
    /// Fallback for a missing per-installment amount.
    pub amount_fallback: AmountFallback,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            default_interval_days: 30,
            amount_fallback: AmountFallback::default(),
        }
    }
}

impl ExpansionOptions {
    /// Builds expansion options from engine configuration.
    ///
    /// Unrecognized fallback names degrade to the default.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let amount_fallback = match config.installment_amount_fallback.as_str() {
            "zero" => AmountFallback::Zero,
            _ => AmountFallback::MethodTotal,
        };

        Self {
            default_interval_days: config.default_installment_interval_days,
            amount_fallback,
        }
    }
}

/// Expands a payment method into its ordered installment schedule.
///
/// Always produces at least one installment: a record with a broken plan
/// must still render as a single event rather than disappear.
#[must_use]
pub fn expand_method(
    method: &PaymentMethod,
    anchor: NaiveDate,
    options: &ExpansionOptions,
) -> Vec<Installment> {
    expand_plan(method.plan(), method.amount(), anchor, options)
}

/// Expands an optional installment plan into a schedule.
///
/// - No plan, or `installments <= 1`: exactly one installment due at
///   `first_due_date`, then `start_date`, then `anchor`, for the method's
///   full amount.
/// - `installments = N > 1`: N installments spaced `interval_days` apart
///   (default per options), each for `installment_value` or the configured
///   fallback.
/// - `installments = 0` is treated as 1; this function never returns an
///   empty schedule.
#[must_use]
pub fn expand_plan(
    plan: Option<&InstallmentPlan>,
    amount: Decimal,
    anchor: NaiveDate,
    options: &ExpansionOptions,
) -> Vec<Installment> {
    let Some(plan) = plan else {
        return vec![Installment {
            sequence: 1,
            due_date: anchor,
            amount,
        }];
    };

    let base = plan.base_date(anchor);
    let count = plan.installments.max(1);

    if count == 1 {
        return vec![Installment {
            sequence: 1,
            due_date: base,
            amount,
        }];
    }

    let interval = plan.interval_days.unwrap_or(options.default_interval_days);
    let per_installment = plan.installment_value.unwrap_or(match options.amount_fallback {
        AmountFallback::MethodTotal => amount,
        AmountFallback::Zero => Decimal::ZERO,
    });

    (1..=count)
        .map(|sequence| Installment {
            sequence,
            due_date: add_days(base, i64::from(sequence - 1) * interval),
            amount: per_installment,
        })
        .collect()
}

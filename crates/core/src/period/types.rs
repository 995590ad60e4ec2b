//! Period summary data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fluxo_shared::types::PaymentKind;

use crate::date::DateRange;
use crate::event::{EventCategory, FinancialEvent};

/// Summary totals for a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total value of sales recorded in the period.
    pub sales: Decimal,
    /// Total cash received in the period.
    pub received: Decimal,
    /// Total value of debts recorded in the period.
    pub debts: Decimal,
    /// Total cash paid out in the period.
    pub paid: Decimal,
    /// `received - paid`. Derived, never stored.
    pub net_result: Decimal,
}

/// Cash movement total for one event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Event category.
    pub category: EventCategory,
    /// Sum of event amounts in the category.
    pub total: Decimal,
}

/// Cash movement totals for one payment method kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodTotal {
    /// Payment method kind.
    pub kind: PaymentKind,
    /// Total received through this method.
    pub inflow: Decimal,
    /// Total paid through this method.
    pub outflow: Decimal,
}

/// Cash movement totals for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotal {
    /// Day.
    pub date: NaiveDate,
    /// Total received on the day.
    pub received: Decimal,
    /// Total paid on the day.
    pub paid: Decimal,
}

/// Aggregated view of a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The queried range.
    pub range: DateRange,
    /// Summary totals.
    pub totals: PeriodTotals,
    /// Cash movements grouped by category; zero-net entries omitted.
    pub by_category: Vec<CategoryTotal>,
    /// Cash movements grouped by payment method; one-sided entries kept.
    pub by_payment_method: Vec<PaymentMethodTotal>,
    /// Daily series in chronological order, for charting.
    pub by_day: Vec<DayTotal>,
    /// Events in the range, newest first.
    pub events: Vec<FinancialEvent>,
}

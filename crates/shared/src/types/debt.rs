//! Debt records (amounts the company owes).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CheckId, DebtId};
use super::payment::PaymentMethod;

/// A debt record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Debt ID.
    pub id: DebtId,
    /// Creditor company name.
    pub company: String,
    /// Free-text description of what the debt is for.
    pub description: String,
    /// Date the debt was recorded.
    pub date: NaiveDate,
    /// Total debt value.
    pub total_value: Decimal,
    /// Payment methods used (or planned) to settle the debt.
    pub payment_methods: Vec<PaymentMethod>,
    /// True once the debt is settled.
    pub is_paid: bool,
    /// Amount already paid.
    pub paid_amount: Decimal,
    /// Amount still outstanding.
    pub pending_amount: Decimal,
    /// Checks handed over to settle this debt (weak references).
    pub checks_used: Vec<CheckId>,
}

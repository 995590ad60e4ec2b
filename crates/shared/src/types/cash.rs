//! Flat cash-affecting records: payroll, PIX fees, manual cash
//! transactions, and the running cash balance snapshot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::{CashTransactionId, EmployeeId, EmployeePaymentId, PixFeeId};

/// A salary payment to an employee. Atomic; never expanded into
/// installments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayment {
    /// Payment ID.
    pub id: EmployeePaymentId,
    /// Employee receiving the payment.
    pub employee_id: EmployeeId,
    /// Employee name, denormalized for labeling.
    pub employee_name: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Date the payment was made.
    pub payment_date: NaiveDate,
}

/// A bank fee on a PIX or wire operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixFee {
    /// Fee ID.
    pub id: PixFeeId,
    /// Date the fee was charged.
    pub date: NaiveDate,
    /// Fee amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Bank that charged the fee.
    pub bank: String,
}

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashDirection {
    /// Money entering the cash box.
    Inflow,
    /// Money leaving the cash box.
    Outflow,
}

/// Category tag on a manual cash transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashCategory {
    /// Sale proceeds.
    Sale,
    /// Debt payment.
    Debt,
    /// Employee advance.
    Advance,
    /// Salary payment.
    Salary,
    /// Sales commission.
    Commission,
    /// Check clearing.
    Check,
    /// Boleto settlement.
    Boleto,
    /// Anything else.
    Other,
}

/// A manually recorded cash movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashTransaction {
    /// Transaction ID.
    pub id: CashTransactionId,
    /// Date of the movement.
    pub date: NaiveDate,
    /// Direction of the movement.
    pub direction: CashDirection,
    /// Amount moved (always non-negative; direction carries the sign).
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Category tag.
    pub category: CashCategory,
    /// The record that caused this movement, if any.
    pub related_id: Option<Uuid>,
}

impl CashTransaction {
    /// Returns the signed amount: positive for inflows, negative for
    /// outflows.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            CashDirection::Inflow => self.amount,
            CashDirection::Outflow => -self.amount,
        }
    }
}

/// The running cash balance snapshot.
///
/// Maintained by the host store; the engine only reads it. Writes are
/// whole-value replacements, never deltas, so a retried write cannot
/// compound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashBalance {
    /// Balance as of now.
    pub current_balance: Decimal,
    /// Balance when tracking started.
    pub initial_balance: Decimal,
    /// Date tracking started.
    pub initial_date: NaiveDate,
}

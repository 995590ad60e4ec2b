//! Sale records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{EmployeeId, SaleId};
use super::payment::PaymentMethod;

/// Payment status of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Fully received.
    Paid,
    /// Partially received.
    Partial,
    /// Nothing received yet.
    Pending,
}

/// A sale record.
///
/// Snapshots are supplied by the host store and are read-only here.
/// `received_amount + pending_amount` is expected to equal `total_value`,
/// but the engine tolerates drift rather than enforcing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Sale ID.
    pub id: SaleId,
    /// Client name.
    pub client: String,
    /// Sale date.
    pub date: NaiveDate,
    /// Scheduled delivery date, if any.
    pub delivery_date: Option<NaiveDate>,
    /// Total sale value.
    pub total_value: Decimal,
    /// Payment methods, in the order they were entered.
    pub payment_methods: Vec<PaymentMethod>,
    /// Amount already received.
    pub received_amount: Decimal,
    /// Amount still outstanding.
    pub pending_amount: Decimal,
    /// Payment status.
    pub status: SaleStatus,
    /// Seller, if one was assigned.
    pub seller_id: Option<EmployeeId>,
}

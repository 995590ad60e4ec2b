//! Financial event data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fluxo_shared::types::PaymentKind;

/// Bucket a financial event falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Money received; counts toward period inflow totals.
    Received,
    /// Money paid out; counts toward period outflow totals.
    Paid,
    /// Expected but not yet collected or paid; never in cash totals.
    Pending,
    /// Informational agenda entry; never in cash totals.
    Calendar,
}

/// Fine-grained classification of an event, used as a grouping key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// A sale was recorded on this date.
    SaleRecorded,
    /// Immediate payment collected at the point of sale.
    SalePayment,
    /// Outstanding balance on a sale.
    SaleOutstanding,
    /// Future credit-card installment receivable.
    CardInstallment,
    /// Scheduled delivery.
    Delivery,
    /// A debt was recorded on this date.
    DebtRecorded,
    /// A scheduled debt installment.
    DebtInstallment,
    /// Immediate payment made against a settled debt.
    DebtPayment,
    /// Third-party check cleared.
    CheckCleared,
    /// Check discounted early for a fee.
    CheckAnticipated,
    /// Check handed over to settle a debt.
    CheckUsedForDebt,
    /// Check awaiting clearing.
    CheckPending,
    /// Company-issued check paid out.
    OwnCheckPaid,
    /// Boleto settled by a client.
    BoletoReceived,
    /// Boleto awaiting settlement.
    BoletoPending,
    /// Company-payable boleto paid out.
    BoletoPaid,
    /// Salary payment.
    Salary,
    /// Bank fee on a PIX or wire operation.
    PixFee,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SaleRecorded => "sale_recorded",
            Self::SalePayment => "sale_payment",
            Self::SaleOutstanding => "sale_outstanding",
            Self::CardInstallment => "card_installment",
            Self::Delivery => "delivery",
            Self::DebtRecorded => "debt_recorded",
            Self::DebtInstallment => "debt_installment",
            Self::DebtPayment => "debt_payment",
            Self::CheckCleared => "check_cleared",
            Self::CheckAnticipated => "check_anticipated",
            Self::CheckUsedForDebt => "check_used_for_debt",
            Self::CheckPending => "check_pending",
            Self::OwnCheckPaid => "own_check_paid",
            Self::BoletoReceived => "boleto_received",
            Self::BoletoPending => "boleto_pending",
            Self::BoletoPaid => "boleto_paid",
            Self::Salary => "salary",
            Self::PixFee => "pix_fee",
        };
        write!(f, "{name}")
    }
}

/// Kind of record an event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Derived from a sale.
    Sale,
    /// Derived from a debt.
    Debt,
    /// Derived from a check.
    Check,
    /// Derived from a boleto.
    Boleto,
    /// Derived from an employee payment.
    EmployeePayment,
    /// Derived from a PIX fee record.
    PixFee,
}

/// Position within an installment series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentRef {
    /// 1-based installment number.
    pub number: u32,
    /// Series length.
    pub total: u32,
}

/// Supplemental event details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Payment method kind behind the event, when one applies.
    pub payment_kind: Option<PaymentKind>,
    /// Installment position, when the event is part of a series.
    pub installment: Option<InstallmentRef>,
    /// Nominal amount before fees/costs, when it differs from `amount`.
    pub original_amount: Option<Decimal>,
    /// Fee deducted (anticipation discount, notary costs).
    pub fee: Option<Decimal>,
    /// Net cash effect, when it differs from the nominal amount.
    pub net_amount: Option<Decimal>,
}

/// A single classified financial event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialEvent {
    /// Date the event falls on.
    pub date: NaiveDate,
    /// Bucket.
    pub kind: EventKind,
    /// Fine-grained category.
    pub category: EventCategory,
    /// Monetary amount. For `Received`/`Paid` this is the true cash
    /// effect (net of fees and costs).
    pub amount: Decimal,
    /// Kind of source record.
    pub source_type: SourceType,
    /// ID of the source record.
    pub source_id: Uuid,
    /// Human-readable label.
    pub label: String,
    /// Supplemental details.
    pub metadata: EventMetadata,
}

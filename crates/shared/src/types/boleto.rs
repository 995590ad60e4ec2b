//! Boleto records (bank payment slips with fixed maturities).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BoletoId, DebtId, SaleId};

/// Status of a boleto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoletoStatus {
    /// Awaiting payment.
    Pending,
    /// Paid; the cash moved.
    Cleared,
    /// Past the due date, not yet resolved.
    Overdue,
    /// Cancelled.
    Cancelled,
    /// Written off as unpaid.
    Unpaid,
}

/// A boleto record.
///
/// When a boleto settles late, `final_amount` carries the amount actually
/// paid (with interest/penalty) and `notary_costs` the protest costs; the
/// true cash effect nets the two against each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boleto {
    /// Boleto ID.
    pub id: BoletoId,
    /// Originating sale, if any (weak reference, lookup only).
    pub sale_id: Option<SaleId>,
    /// Debt this boleto settles, if any (weak reference).
    pub debt_id: Option<DebtId>,
    /// Counterparty name.
    pub client: String,
    /// Nominal value.
    pub value: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Current status.
    pub status: BoletoStatus,
    /// Position within the installment series.
    pub installment_number: u32,
    /// Series length.
    pub total_installments: u32,
    /// Amount actually settled, when different from the nominal value.
    pub final_amount: Option<Decimal>,
    /// Notary/protest costs deducted from the settlement.
    pub notary_costs: Decimal,
    /// Interest collected on late payment, if any.
    pub interest_amount: Option<Decimal>,
    /// Penalty collected on late payment, if any.
    pub penalty_amount: Option<Decimal>,
    /// True when the boleto is one the company must pay (a payable).
    pub company_payable: bool,
}

impl Boleto {
    /// Returns the true cash effect of settling this boleto:
    /// `final_amount` (or the nominal value) minus notary costs.
    #[must_use]
    pub fn net_cash_effect(&self) -> Decimal {
        self.final_amount.unwrap_or(self.value) - self.notary_costs
    }

    /// Returns the `i/N` installment label.
    #[must_use]
    pub fn installment_label(&self) -> String {
        format!("{}/{}", self.installment_number, self.total_installments)
    }
}

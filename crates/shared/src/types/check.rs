//! Check records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CheckId, DebtId, SaleId};

/// Status of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Awaiting clearing.
    Pending,
    /// Cleared; the cash moved.
    Cleared,
    /// Bounced.
    Returned,
    /// Re-presented after bouncing.
    Represented,
}

/// Early-discount terms for a check sold before its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anticipation {
    /// Discount fee charged by the buyer.
    pub fee: Decimal,
    /// Cash actually received (face value minus fee).
    pub net_amount: Decimal,
}

/// A check record.
///
/// Third-party checks received from clients are receivables; checks the
/// company itself issues (`own_check`) are payables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    /// Check ID.
    pub id: CheckId,
    /// Originating sale, if any (weak reference, lookup only).
    pub sale_id: Option<SaleId>,
    /// Debt this check settles, if any (weak reference).
    pub debt_id: Option<DebtId>,
    /// Counterparty name.
    pub client: String,
    /// Face value.
    pub value: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Current status.
    pub status: CheckStatus,
    /// True when issued by the company itself (a payable).
    pub own_check: bool,
    /// Position within an installment series, if part of one.
    pub installment_number: Option<u32>,
    /// Series length, if part of an installment series.
    pub total_installments: Option<u32>,
    /// Free text describing what the check was used for.
    pub used_for: Option<String>,
    /// Date the check was discounted early, if it was.
    pub discount_date: Option<NaiveDate>,
    /// Early-discount terms, when the check was anticipated.
    pub anticipation: Option<Anticipation>,
}

impl Check {
    /// Returns the cash actually received for this check: the anticipated
    /// net amount when discounted, the face value otherwise.
    #[must_use]
    pub fn net_cash_effect(&self) -> Decimal {
        self.anticipation.map_or(self.value, |a| a.net_amount)
    }

    /// Returns the `i/N` installment label, when the check is part of a
    /// series.
    #[must_use]
    pub fn installment_label(&self) -> Option<String> {
        match (self.installment_number, self.total_installments) {
            (Some(i), Some(n)) => Some(format!("{i}/{n}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_check() -> Check {
        Check {
            id: CheckId::new(),
            sale_id: None,
            debt_id: None,
            client: "Client".to_string(),
            value: dec!(500),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            status: CheckStatus::Pending,
            own_check: false,
            installment_number: None,
            total_installments: None,
            used_for: None,
            discount_date: None,
            anticipation: None,
        }
    }

    #[test]
    fn test_net_cash_effect_without_anticipation() {
        assert_eq!(sample_check().net_cash_effect(), dec!(500));
    }

    #[test]
    fn test_net_cash_effect_with_anticipation() {
        let mut check = sample_check();
        check.anticipation = Some(Anticipation {
            fee: dec!(25),
            net_amount: dec!(475),
        });
        assert_eq!(check.net_cash_effect(), dec!(475));
    }

    #[test]
    fn test_installment_label() {
        let mut check = sample_check();
        assert_eq!(check.installment_label(), None);

        check.installment_number = Some(2);
        check.total_installments = Some(5);
        assert_eq!(check.installment_label().as_deref(), Some("2/5"));
    }
}

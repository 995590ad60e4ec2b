//! Payment methods attached to sales and debts.
//!
//! Each method is a tagged variant carrying only the fields relevant to its
//! kind; methods that schedule future collections carry an optional
//! [`InstallmentPlan`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Installment schedule parameters for a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    /// Number of installments.
    pub installments: u32,
    /// Per-installment amount, if specified.
    pub installment_value: Option<Decimal>,
    /// Days between consecutive installments, if specified.
    pub interval_days: Option<i64>,
    /// Due date of the first installment, if specified.
    pub first_due_date: Option<NaiveDate>,
    /// Legacy schedule start date, used when `first_due_date` is absent.
    pub start_date: Option<NaiveDate>,
}

impl InstallmentPlan {
    /// Returns the schedule base date: first due date, then start date,
    /// then the given anchor.
    #[must_use]
    pub fn base_date(&self, anchor: NaiveDate) -> NaiveDate {
        self.first_due_date.or(self.start_date).unwrap_or(anchor)
    }
}

/// Payment method kind, used as a grouping key in summaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Cash.
    Cash,
    /// PIX instant transfer.
    Pix,
    /// Debit card.
    DebitCard,
    /// Credit card, possibly in installments.
    CreditCard,
    /// Check.
    Check,
    /// Boleto payment slip.
    Boleto,
    /// Bank transfer.
    Transfer,
    /// Barter (goods exchanged instead of money).
    Barter,
    /// Running settlement account with a client or supplier.
    Settlement,
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cash => "cash",
            Self::Pix => "pix",
            Self::DebitCard => "debit_card",
            Self::CreditCard => "credit_card",
            Self::Check => "check",
            Self::Boleto => "boleto",
            Self::Transfer => "transfer",
            Self::Barter => "barter",
            Self::Settlement => "settlement",
        };
        write!(f, "{name}")
    }
}

/// How a portion of a sale or debt is (to be) paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash, settled on the spot.
    Cash {
        /// Amount paid with this method.
        amount: Decimal,
    },
    /// PIX, settled on the spot.
    Pix {
        /// Amount paid with this method.
        amount: Decimal,
    },
    /// Debit card, settled on the spot.
    DebitCard {
        /// Amount paid with this method.
        amount: Decimal,
    },
    /// Bank transfer.
    Transfer {
        /// Amount paid with this method.
        amount: Decimal,
    },
    /// Barter; informational, no cash movement.
    Barter {
        /// Agreed value of the bartered goods.
        amount: Decimal,
    },
    /// Running settlement account; collected outside the sale itself.
    Settlement {
        /// Amount added to the settlement account.
        amount: Decimal,
    },
    /// Credit card, single payment or installment plan.
    CreditCard {
        /// Total amount charged to the card.
        amount: Decimal,
        /// Installment plan, when paid in more than one charge.
        plan: Option<InstallmentPlan>,
    },
    /// Check(s) with future due dates.
    Check {
        /// Total amount covered by the check(s).
        amount: Decimal,
        /// True when the company issues the check (a payable).
        own_check: bool,
        /// Installment plan, when split across several checks.
        plan: Option<InstallmentPlan>,
    },
    /// Boleto(s) with future due dates.
    Boleto {
        /// Total amount covered by the boleto(s).
        amount: Decimal,
        /// Installment plan, when split across several boletos.
        plan: Option<InstallmentPlan>,
    },
}

impl PaymentMethod {
    /// Returns the method's total amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Cash { amount }
            | Self::Pix { amount }
            | Self::DebitCard { amount }
            | Self::Transfer { amount }
            | Self::Barter { amount }
            | Self::Settlement { amount }
            | Self::CreditCard { amount, .. }
            | Self::Check { amount, .. }
            | Self::Boleto { amount, .. } => *amount,
        }
    }

    /// Returns the method's kind.
    #[must_use]
    pub const fn kind(&self) -> PaymentKind {
        match self {
            Self::Cash { .. } => PaymentKind::Cash,
            Self::Pix { .. } => PaymentKind::Pix,
            Self::DebitCard { .. } => PaymentKind::DebitCard,
            Self::Transfer { .. } => PaymentKind::Transfer,
            Self::Barter { .. } => PaymentKind::Barter,
            Self::Settlement { .. } => PaymentKind::Settlement,
            Self::CreditCard { .. } => PaymentKind::CreditCard,
            Self::Check { .. } => PaymentKind::Check,
            Self::Boleto { .. } => PaymentKind::Boleto,
        }
    }

    /// Returns the method's installment plan, if any.
    #[must_use]
    pub const fn plan(&self) -> Option<&InstallmentPlan> {
        match self {
            Self::CreditCard { plan, .. }
            | Self::Check { plan, .. }
            | Self::Boleto { plan, .. } => plan.as_ref(),
            _ => None,
        }
    }

    /// Returns the number of installments the method schedules (at least 1).
    #[must_use]
    pub fn installment_count(&self) -> u32 {
        self.plan().map_or(1, |p| p.installments.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_and_kind_accessors() {
        let method = PaymentMethod::Pix {
            amount: dec!(150.00),
        };
        assert_eq!(method.amount(), dec!(150.00));
        assert_eq!(method.kind(), PaymentKind::Pix);
        assert!(method.plan().is_none());
    }

    #[test]
    fn test_installment_count_defaults_to_one() {
        let single = PaymentMethod::Cash { amount: dec!(10) };
        assert_eq!(single.installment_count(), 1);

        let broken_plan = PaymentMethod::Check {
            amount: dec!(300),
            own_check: false,
            plan: Some(InstallmentPlan {
                installments: 0,
                installment_value: None,
                interval_days: None,
                first_due_date: None,
                start_date: None,
            }),
        };
        assert_eq!(broken_plan.installment_count(), 1);
    }

    #[test]
    fn test_base_date_precedence() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        let mut plan = InstallmentPlan {
            installments: 3,
            installment_value: None,
            interval_days: None,
            first_due_date: Some(first),
            start_date: Some(start),
        };
        assert_eq!(plan.base_date(anchor), first);

        plan.first_due_date = None;
        assert_eq!(plan.base_date(anchor), start);

        plan.start_date = None;
        assert_eq!(plan.base_date(anchor), anchor);
    }
}

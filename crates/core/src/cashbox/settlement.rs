//! Settlement cash movements.
//!
//! When the host marks a check or boleto as cleared, these functions
//! compute the cash transactions it should persist. The engine only
//! derives the records; writing them (and replacing the stored balance)
//! stays with the host.

use rust_decimal::Decimal;

use fluxo_shared::types::{
    Boleto, BoletoStatus, CashCategory, CashDirection, CashTransaction, CashTransactionId, Check,
    CheckStatus,
};

/// Cash transactions for a check status transition.
///
/// Only a transition into `Cleared` from a non-cleared status moves cash:
/// an own check is an outflow, a third-party check an inflow (the
/// anticipated net amount when the check was discounted). Every other
/// transition produces nothing, so a retried update cannot double-apply.
#[must_use]
pub fn check_settlement(
    check: &Check,
    old_status: CheckStatus,
    new_status: CheckStatus,
) -> Vec<CashTransaction> {
    if old_status == CheckStatus::Cleared || new_status != CheckStatus::Cleared {
        return Vec::new();
    }

    let (direction, description) = if check.own_check {
        (
            CashDirection::Outflow,
            format!("Own check paid - {}", check.client),
        )
    } else {
        (
            CashDirection::Inflow,
            format!("Check cleared - {}", check.client),
        )
    };

    vec![CashTransaction {
        id: CashTransactionId::new(),
        date: check.due_date,
        direction,
        amount: check.net_cash_effect(),
        description,
        category: CashCategory::Check,
        related_id: Some(check.id.into_inner()),
    }]
}

/// Cash transactions for a boleto status transition.
///
/// Only a transition into `Cleared` moves cash. A company-payable boleto
/// is a single outflow of the settled amount. A received boleto is an
/// inflow of `final_amount - notary_costs`, plus a separate outflow for
/// the notary costs when there are any, matching how the movements appear
/// on a bank statement.
#[must_use]
pub fn boleto_settlement(
    boleto: &Boleto,
    old_status: BoletoStatus,
    new_status: BoletoStatus,
) -> Vec<CashTransaction> {
    if old_status == BoletoStatus::Cleared || new_status != BoletoStatus::Cleared {
        return Vec::new();
    }

    let settled = boleto.final_amount.unwrap_or(boleto.value);

    if boleto.company_payable {
        return vec![CashTransaction {
            id: CashTransactionId::new(),
            date: boleto.due_date,
            direction: CashDirection::Outflow,
            amount: settled,
            description: format!("Boleto paid - {}", boleto.client),
            category: CashCategory::Boleto,
            related_id: Some(boleto.id.into_inner()),
        }];
    }

    let mut transactions = vec![CashTransaction {
        id: CashTransactionId::new(),
        date: boleto.due_date,
        direction: CashDirection::Inflow,
        amount: settled - boleto.notary_costs,
        description: format!("Boleto received - {}", boleto.client),
        category: CashCategory::Boleto,
        related_id: Some(boleto.id.into_inner()),
    }];

    if boleto.notary_costs > Decimal::ZERO {
        transactions.push(CashTransaction {
            id: CashTransactionId::new(),
            date: boleto.due_date,
            direction: CashDirection::Outflow,
            amount: boleto.notary_costs,
            description: format!("Notary costs - {}", boleto.client),
            category: CashCategory::Other,
            related_id: Some(boleto.id.into_inner()),
        });
    }

    transactions
}

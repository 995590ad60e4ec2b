//! Cash balance projection service.

use rust_decimal::Decimal;

use fluxo_shared::types::{CashBalance, CashTransaction};

use crate::event::{EventKind, FinancialEvent};

/// Read-side helpers over the externally maintained cash balance.
///
/// The balance value is replaced wholesale by the host whenever a
/// cash-affecting action is confirmed; applying deltas here would compound
/// rounding and double-application errors on retried writes, so this
/// service only reads and previews.
pub struct CashProjector;

impl CashProjector {
    /// Returns the stored current balance, zero when the host tracks none.
    #[must_use]
    pub fn current_balance(balance: Option<&CashBalance>) -> Decimal {
        balance.map_or(Decimal::ZERO, |b| b.current_balance)
    }

    /// Returns the delta an event would apply to the cash balance if
    /// confirmed: positive for received, negative for paid, zero for
    /// pending and agenda events.
    #[must_use]
    pub fn would_change_by(event: &FinancialEvent) -> Decimal {
        match event.kind {
            EventKind::Received => event.amount,
            EventKind::Paid => -event.amount,
            EventKind::Pending | EventKind::Calendar => Decimal::ZERO,
        }
    }

    /// Previews the balance after confirming an event, without writing
    /// anything.
    #[must_use]
    pub fn preview_after(balance: Option<&CashBalance>, event: &FinancialEvent) -> Decimal {
        Self::current_balance(balance) + Self::would_change_by(event)
    }

    /// Derives a balance from an initial value plus manually recorded cash
    /// transactions only. Sales and debts are not replayed here; their
    /// cash effects reach the balance through the host's own writes.
    #[must_use]
    pub fn project(initial: Decimal, transactions: &[CashTransaction]) -> Decimal {
        initial
            + transactions
                .iter()
                .map(CashTransaction::signed_amount)
                .sum::<Decimal>()
    }
}

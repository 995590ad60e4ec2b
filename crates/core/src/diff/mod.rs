//! New-record counters between snapshots.
//!
//! Hosts that want a "N new records since last view" badge keep the
//! previous [`SnapshotCounts`] themselves and ask the engine only for the
//! delta; nothing is persisted here.

use serde::{Deserialize, Serialize};

use fluxo_shared::types::SnapshotCounts;

/// Records added per entity between two snapshots.
///
/// Deletions never produce negative deltas; a shrunk entity reports zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDelta {
    /// New sales.
    pub sales: usize,
    /// New debts.
    pub debts: usize,
    /// New checks.
    pub checks: usize,
    /// New boletos.
    pub boletos: usize,
    /// New employee payments.
    pub employee_payments: usize,
    /// New PIX fees.
    pub pix_fees: usize,
    /// New manual cash transactions.
    pub cash_transactions: usize,
}

impl SnapshotDelta {
    /// Total number of new records across all entities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.sales
            + self.debts
            + self.checks
            + self.boletos
            + self.employee_payments
            + self.pix_fees
            + self.cash_transactions
    }

    /// Returns true when nothing was added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Computes the per-entity difference between a previously seen count set
/// and the current one.
#[must_use]
pub fn diff_counts(previous: &SnapshotCounts, current: &SnapshotCounts) -> SnapshotDelta {
    SnapshotDelta {
        sales: current.sales.saturating_sub(previous.sales),
        debts: current.debts.saturating_sub(previous.debts),
        checks: current.checks.saturating_sub(previous.checks),
        boletos: current.boletos.saturating_sub(previous.boletos),
        employee_payments: current
            .employee_payments
            .saturating_sub(previous.employee_payments),
        pix_fees: current.pix_fees.saturating_sub(previous.pix_fees),
        cash_transactions: current
            .cash_transactions
            .saturating_sub(previous.cash_transactions),
    }
}

//! In-memory snapshot of all records handed to the engine.

use serde::{Deserialize, Serialize};

use super::boleto::Boleto;
use super::cash::{CashBalance, CashTransaction, EmployeePayment, PixFee};
use super::check::Check;
use super::debt::Debt;
use super::sale::Sale;

/// A read-only snapshot of every record array the engine consumes.
///
/// The host store fetches these before calling the engine; every
/// projection is recomputed from the snapshot it is given, so two
/// concurrent callers never share mutable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// All sales.
    pub sales: Vec<Sale>,
    /// All debts.
    pub debts: Vec<Debt>,
    /// All checks.
    pub checks: Vec<Check>,
    /// All boletos.
    pub boletos: Vec<Boleto>,
    /// All employee payments.
    pub employee_payments: Vec<EmployeePayment>,
    /// All PIX fees.
    pub pix_fees: Vec<PixFee>,
    /// All manual cash transactions.
    pub cash_transactions: Vec<CashTransaction>,
    /// The running cash balance, if the host tracks one.
    pub cash_balance: Option<CashBalance>,
}

impl Snapshot {
    /// Returns per-entity record counts, used for new-activity diffing.
    #[must_use]
    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            sales: self.sales.len(),
            debts: self.debts.len(),
            checks: self.checks.len(),
            boletos: self.boletos.len(),
            employee_payments: self.employee_payments.len(),
            pix_fees: self.pix_fees.len(),
            cash_transactions: self.cash_transactions.len(),
        }
    }
}

/// Per-entity record counts for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCounts {
    /// Number of sales.
    pub sales: usize,
    /// Number of debts.
    pub debts: usize,
    /// Number of checks.
    pub checks: usize,
    /// Number of boletos.
    pub boletos: usize,
    /// Number of employee payments.
    pub employee_payments: usize,
    /// Number of PIX fees.
    pub pix_fees: usize,
    /// Number of manual cash transactions.
    pub cash_transactions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_counts() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.counts(), SnapshotCounts::default());
    }
}

//! Common types used across the application.

pub mod boleto;
pub mod cash;
pub mod check;
pub mod debt;
pub mod id;
pub mod money;
pub mod payment;
pub mod sale;
pub mod snapshot;

pub use boleto::{Boleto, BoletoStatus};
pub use cash::{
    CashBalance, CashCategory, CashDirection, CashTransaction, EmployeePayment, PixFee,
};
pub use check::{Anticipation, Check, CheckStatus};
pub use debt::Debt;
pub use id::*;
pub use payment::{InstallmentPlan, PaymentKind, PaymentMethod};
pub use sale::{Sale, SaleStatus};
pub use snapshot::{Snapshot, SnapshotCounts};

//! Cash balance reads, previews, and settlement movements.
//!
//! The stored cash balance is owned by the host and is authoritative; the
//! engine never recomputes or overrides it. This module exposes read-side
//! helpers and the pure functions that tell a host which cash transactions
//! a settlement should record.

pub mod service;
pub mod settlement;

pub use service::CashProjector;
pub use settlement::{boleto_settlement, check_settlement};

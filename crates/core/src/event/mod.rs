//! Classification of raw records into financial events.
//!
//! Every monetary fact in a snapshot maps to zero or more typed events:
//! money received, money paid, amounts pending, and informational agenda
//! entries. Classification is stateless and pure; the same snapshot and
//! range always produce the same events in the same order.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::EventClassifier;
pub use types::{
    EventCategory, EventKind, EventMetadata, FinancialEvent, InstallmentRef, SourceType,
};

//! Core projection logic for Fluxo.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Every operation is a synchronous function over an
//! in-memory [`fluxo_shared::types::Snapshot`] the host has already
//! fetched; the engine performs no I/O and keeps no state of its own.
//!
//! # Modules
//!
//! - `date` - Date-only arithmetic and inclusive date ranges
//! - `installment` - Payment plan expansion into scheduled installments
//! - `event` - Classification of records into financial events
//! - `period` - Period totals, groupings, and the summary cache
//! - `cashbox` - Cash balance reads, previews, and settlement movements
//! - `calendar` - Month grid construction for agenda views
//! - `diff` - New-record counters between snapshots
//! - `ingest` - Lenient adapter from host JSON to canonical records

pub mod calendar;
pub mod cashbox;
pub mod date;
pub mod diff;
pub mod event;
pub mod ingest;
pub mod installment;
pub mod period;

//! Payment plan expansion.
//!
//! Expands a payment method's installment plan into the ordered sequence of
//! scheduled installments. Expansion is a pure function of its inputs;
//! calling it twice with the same arguments yields identical results, which
//! calendar rendering relies on.

pub mod schedule;

#[cfg(test)]
mod schedule_props;

pub use schedule::{AmountFallback, ExpansionOptions, Installment, expand_method, expand_plan};

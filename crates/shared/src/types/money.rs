//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations. All monetary
//! amounts in the system are `rust_decimal::Decimal`; these helpers cover
//! boundary rounding and lenient parsing of amounts arriving from hosts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for BRL amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to currency precision.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Leniently parses an amount string into a `Decimal`.
///
/// Accepts plain decimal notation ("1234.56") and Brazilian currency
/// notation ("R$ 1.234,56" with thousands dots and a comma decimal
/// separator). Returns `None` for anything that is not a number.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != 'R' && *c != '$')
        .collect();

    // A comma marks Brazilian notation: dots are thousands separators.
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    normalized.parse::<Decimal>().ok()
}

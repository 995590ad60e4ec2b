//! Field extraction helpers for loosely-shaped host JSON.
//!
//! Host exports arrive with inconsistent casing and naming (snake_case,
//! camelCase, Portuguese spreadsheet headers). Lookup tries the given
//! aliases exactly, then case-insensitively; canonicalization happens
//! here so the record shapes stay single-form.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use uuid::Uuid;

use fluxo_shared::types::money::parse_amount;

use crate::date::parse_iso_date;

/// Looks a field up by any of its aliases, skipping JSON nulls.
pub(crate) fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    for name in names {
        if let Some(value) = obj.get(*name) {
            if !value.is_null() {
                return Some(value);
            }
        }
    }
    obj.iter()
        .find(|(key, value)| {
            !value.is_null() && names.iter().any(|name| key.eq_ignore_ascii_case(name))
        })
        .map(|(_, value)| value)
}

/// Extracts a non-empty trimmed string.
pub(crate) fn string_field(obj: &Map<String, Value>, names: &[&str]) -> Option<String> {
    let raw = field(obj, names)?.as_str()?.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Extracts a monetary amount from a JSON number or a lenient string
/// ("1234.56", "1.234,56", "R$ 1.234,56").
pub(crate) fn amount_field(obj: &Map<String, Value>, names: &[&str]) -> Option<Decimal> {
    match field(obj, names)? {
        // Going through the number's textual form keeps the conversion
        // exact and float-free.
        Value::Number(number) => Decimal::from_str(&number.to_string()).ok(),
        Value::String(raw) => parse_amount(raw),
        _ => None,
    }
}

/// Extracts a date from an ISO `YYYY-MM-DD` or Brazilian `DD/MM/YYYY`
/// string.
pub(crate) fn date_field(obj: &Map<String, Value>, names: &[&str]) -> Option<NaiveDate> {
    parse_date_lenient(field(obj, names)?.as_str()?)
}

/// Parses `YYYY-MM-DD` (with optional time suffix) or `DD/MM/YYYY`.
pub(crate) fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Some(date) = parse_iso_date(trimmed) {
        return Some(date);
    }

    let mut parts = trimmed.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extracts a boolean from a JSON bool or a "true"/"false" string.
pub(crate) fn bool_field(obj: &Map<String, Value>, names: &[&str]) -> Option<bool> {
    match field(obj, names)? {
        Value::Bool(flag) => Some(*flag),
        Value::String(raw) => match raw.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Extracts a small non-negative integer from a number or numeric string.
pub(crate) fn u32_field(obj: &Map<String, Value>, names: &[&str]) -> Option<u32> {
    match field(obj, names)? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

/// Extracts a signed integer from a number or numeric string.
pub(crate) fn i64_field(obj: &Map<String, Value>, names: &[&str]) -> Option<i64> {
    match field(obj, names)? {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

/// Extracts a UUID from its string form.
pub(crate) fn uuid_field(obj: &Map<String, Value>, names: &[&str]) -> Option<Uuid> {
    Uuid::parse_str(field(obj, names)?.as_str()?).ok()
}

/// Lowercases, trims, folds the accented characters that appear in
/// Portuguese method/status names, and joins words with underscores.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            ' ' => '_',
            other => other,
        })
        .collect()
}

//! Human-readable message extraction from auth error bodies.
//!
//! The auth API has no single error shape. Depending on the failure it
//! answers with a bare string, `{"error": ...}`, `{"detail": ...}`, or
//! field-keyed validation errors like `{"phone": ["This field is required."]}`.
//! [`extract_error_message`] folds all of them into one line of text.
//!
//! Truthiness and stringification follow loose JSON conventions: `null`,
//! `false`, `0` and `""` are falsy, arrays and objects are always truthy,
//! arrays stringify comma-joined and objects as `[object Object]`. Numbers
//! outside `[1e-6, 1e21)` print in exponent form (`1e+21`, `1e-7`).
//!
//! Object fields are visited with array-index keys (`"0"`, `"1"`, ...) first
//! in ascending order, then the remaining keys in the order they arrived.

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

use serde_json::{Map, Value};

pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Derive the message to show for a rejected request.
///
/// Pure function of `body`; `None` means the body was absent.
#[must_use]
pub fn extract_error_message(body: Option<&Value>) -> String {
    let Some(body) = body.filter(|b| is_truthy(b)) else {
        return REQUEST_FAILED_MESSAGE.to_owned();
    };

    let values: Vec<&Value> = match body {
        Value::String(s) => return s.clone(),
        Value::Object(map) => {
            for key in ["error", "detail"] {
                if let Some(v) = map.get(key).filter(|v| is_truthy(v)) {
                    return stringify(v);
                }
            }
            field_values(map)
        }
        Value::Array(items) => items.iter().collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => return REQUEST_FAILED_MESSAGE.to_owned(),
    };

    match values.into_iter().find(|v| is_truthy(v)) {
        Some(Value::Array(items)) if !items.is_empty() => stringify(&items[0]),
        Some(Value::String(s)) => s.clone(),
        _ => REQUEST_FAILED_MESSAGE.to_owned(),
    }
}

/// Values of `map`, array-index keys first in numeric order, then the rest
/// in insertion order.
fn field_values(map: &Map<String, Value>) -> Vec<&Value> {
    let mut indexed: Vec<(u32, &Value)> = map.iter().filter_map(|(k, v)| array_index(k).map(|i| (i, v))).collect();
    indexed.sort_by_key(|(i, _)| *i);

    indexed
        .into_iter()
        .map(|(_, v)| v)
        .chain(map.iter().filter(|(k, _)| array_index(k).is_none()).map(|(_, v)| v))
        .collect()
}

/// Canonical array index: no sign, no leading zeros, below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|i| *i != u32::MAX)
}

/// Loose truthiness of a JSON value.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose string conversion of a JSON value.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => stringify_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn stringify_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_owned(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_form(f),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` -> `1.5e-7`.
fn exponent_form(f: f64) -> String {
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

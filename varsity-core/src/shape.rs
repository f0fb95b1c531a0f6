//! Shape-tolerant probing over `serde_json::Value`.
//!
//! Several providers emit the same logical block as either a bare array or
//! an object wrapping an array, depending on endpoint mood. These helpers
//! make the tolerated shapes explicit at each call site instead of
//! scattering duck-typed branching through the adapters. Numeric coercion
//! always treats placeholders (`"-"`, `""`) as zero.

use std::str::FromStr;

use serde_json::Value;

const EMPTY: &[Value] = &[];

/// `node[key]` as an array slice; empty when absent or not an array.
#[must_use]
pub fn array_of<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    node.get(key)
        .and_then(Value::as_array)
        .map_or(EMPTY, Vec::as_slice)
}

/// Probe a block that is either a bare array or an object wrapping one
/// under `key`. Anything else yields an empty slice.
#[must_use]
pub fn list_or<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    match node {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => array_of(node, key),
        _ => EMPTY,
    }
}

/// Probe a standings block that is either a bare entry list or an object
/// carrying an `entries` array.
#[must_use]
pub fn entries_of(node: &Value) -> &[Value] {
    list_or(node, "entries")
}

/// `node[key]` as a string; empty string when absent or not a string.
#[must_use]
pub fn str_of<'a>(node: &'a Value, key: &str) -> &'a str {
    node.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Coerce a scalar to `f64`: numbers pass through, numeric strings parse,
/// placeholders and everything else collapse to `0.0`.
#[must_use]
pub fn num(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_or_zero(s),
        _ => 0.0,
    }
}

/// `num` applied to `node[key]`; `0.0` when the key is absent.
#[must_use]
pub fn num_of(node: &Value, key: &str) -> f64 {
    node.get(key).map_or(0.0, num)
}

/// `num_of` truncated to an unsigned count. Negative values clamp to 0.
#[must_use]
pub fn count_of(node: &Value, key: &str) -> u32 {
    let v = num_of(node, key);
    if v.is_sign_negative() { 0 } else { v as u32 }
}

/// Parse a provider-supplied cell, substituting the default (zero) for
/// placeholders (`"-"`, `""`) and anything unparsable.
#[must_use]
pub fn parse_or_zero<T>(text: &str) -> T
where
    T: FromStr + Default,
{
    let text = text.trim();
    if text.is_empty() || text == "-" {
        return T::default();
    }
    text.parse().unwrap_or_default()
}

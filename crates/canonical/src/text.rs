//! Deterministic canonical text encoding.
//!
//! The encoding is JSON text extended with a distinguished `undefined`
//! literal. Object keys are written in stored order, so callers that need an
//! order-insensitive encoding canonicalize first; the comparator in
//! `json-struct-unique` does exactly that.

use json_struct_value::Value;

use crate::error::CanonicalError;
use crate::sort::MAX_DEPTH;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Encode a value to its deterministic canonical text.
///
/// Integral numbers are written without a fractional part (`1`, not `1.0`),
/// everything else in shortest-round-trip notation. Non-finite numbers are
/// a [`CanonicalError::TypeMismatch`].
pub fn canonical_string(value: &Value) -> Result<String, CanonicalError> {
    let mut out = String::new();
    write_value(&mut out, value, 0)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize) -> Result<(), CanonicalError> {
    if depth > MAX_DEPTH {
        return Err(CanonicalError::DepthLimit { max: MAX_DEPTH });
    }
    match value {
        Value::Null => out.push_str("null"),
        Value::Undefined => out.push_str("undefined"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, *n)?,
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item, depth + 1)?;
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, val, depth + 1)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(out: &mut String, n: f64) -> Result<(), CanonicalError> {
    if !n.is_finite() {
        return Err(CanonicalError::type_mismatch(n));
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        out.push_str(&(n as i64).to_string());
    } else {
        // Shortest round-trip float notation, via serde_json's ryu-backed
        // formatter. from_f64 is Some for every finite input.
        if let Some(num) = serde_json::Number::from_f64(n) {
            out.push_str(&num.to_string());
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    // serde_json's Display performs JSON string escaping.
    out.push_str(&serde_json::Value::from(s).to_string());
}

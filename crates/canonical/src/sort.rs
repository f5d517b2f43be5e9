//! Recursive canonicalization of arrays and objects.

use std::cmp::Ordering;

use json_struct_value::{IndexMap, TypeTag, Value};

use crate::error::CanonicalError;
use crate::text::canonical_string;

/// Maximum supported nesting depth. Input nested deeper than this is
/// reported as [`CanonicalError::DepthLimit`].
pub const MAX_DEPTH: usize = 128;

/// Canonicalize an array: every element is recursively canonicalized, then
/// the elements are sorted by the cross-type total order (type tag rank
/// first, then value within the tag; containers compare by canonical text).
///
/// # Examples
///
/// ```
/// use json_struct_canonical::sort_array;
/// use json_struct_value::Value;
/// use serde_json::json;
///
/// let sorted = sort_array(&Value::from(json!([3, 1, 2]))).unwrap();
/// assert_eq!(sorted, Value::from(json!([1, 2, 3])));
/// ```
pub fn sort_array(value: &Value) -> Result<Value, CanonicalError> {
    if !value.is_array() {
        return Err(CanonicalError::invalid_argument(TypeTag::Array, value));
    }
    canonicalize(value, 0)
}

/// Canonicalize an object: keys rewritten into lexicographic order, values
/// recursively canonicalized.
///
/// # Examples
///
/// ```
/// use json_struct_canonical::{canonical_string, sort_object};
/// use json_struct_value::Value;
/// use serde_json::json;
///
/// let sorted = sort_object(&Value::from(json!({"b": 2, "a": 1}))).unwrap();
/// assert_eq!(canonical_string(&sorted).unwrap(), r#"{"a":1,"b":2}"#);
/// ```
pub fn sort_object(value: &Value) -> Result<Value, CanonicalError> {
    if !value.is_object() {
        return Err(CanonicalError::invalid_argument(TypeTag::Object, value));
    }
    canonicalize(value, 0)
}

fn canonicalize(value: &Value, depth: usize) -> Result<Value, CanonicalError> {
    if depth > MAX_DEPTH {
        return Err(CanonicalError::DepthLimit { max: MAX_DEPTH });
    }
    match value {
        Value::Number(n) if !n.is_finite() => Err(CanonicalError::type_mismatch(*n)),
        Value::Null | Value::Undefined | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Ok(value.clone())
        }
        Value::Array(items) => {
            let mut keyed: Vec<(Value, String)> = Vec::with_capacity(items.len());
            for item in items {
                let canonical = canonicalize(item, depth + 1)?;
                let text = canonical_string(&canonical)?;
                keyed.push((canonical, text));
            }
            keyed.sort_by(|(a, text_a), (b, text_b)| cross_type_order(a, text_a, b, text_b));
            Ok(Value::Array(keyed.into_iter().map(|(v, _)| v).collect()))
        }
        Value::Object(entries) => {
            let mut pairs: Vec<(&String, &Value)> = entries.iter().collect();
            pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut out = IndexMap::with_capacity(pairs.len());
            for (key, val) in pairs {
                out.insert(key.clone(), canonicalize(val, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
    }
}

/// Explicit total order over canonicalized elements: type tag rank first,
/// then native value order within the tag. Containers (and the unit tags)
/// fall back to their canonical text. Numbers are finite here, so `total_cmp`
/// agrees with ordinary numeric comparison.
fn cross_type_order(a: &Value, text_a: &str, b: &Value, text_b: &str) -> Ordering {
    a.type_tag().cmp(&b.type_tag()).then_with(|| match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => text_a.cmp(text_b),
    })
}

//! First-seen deduplication.

use json_struct_canonical::CanonicalError;
use json_struct_value::{TypeTag, Value};

use crate::locate::index_of_slice;

/// Reduce an array to its distinct elements, keeping the first occurrence of
/// each and preserving first-appearance order.
///
/// Primitives deduplicate by strict native equality; arrays and objects by
/// canonical structural equality, so `{"a":1,"b":2}` and `{"b":2,"a":1}`
/// collapse into one.
///
/// # Examples
///
/// ```
/// use json_struct_unique::unique;
/// use json_struct_value::Value;
/// use serde_json::json;
///
/// let input = Value::from(json!([1, 2, 1, {"a": 1}, {"a": 1}, 3]));
/// let out = unique(&input).unwrap();
/// assert_eq!(out, Value::from(json!([1, 2, {"a": 1}, 3])));
/// ```
pub fn unique(value: &Value) -> Result<Value, CanonicalError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(CanonicalError::invalid_argument(TypeTag::Array, other)),
    };
    let mut kept: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        let duplicate = if item.is_container() {
            index_of_slice(&kept, item, 0)?.is_some()
        } else {
            kept.iter().any(|seen| seen == item)
        };
        if !duplicate {
            kept.push(item.clone());
        }
    }
    Ok(Value::Array(kept))
}

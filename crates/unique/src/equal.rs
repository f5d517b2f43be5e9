//! Canonical structural equality for containers.

use json_struct_canonical::{canonical_string, sort_array, sort_object, CanonicalError};
use json_struct_value::{TypeTag, Value};

/// Structural equality of two objects: both sides are canonicalized and
/// their canonical texts compared. Key order never matters.
///
/// Both arguments must be objects; anything else is
/// [`CanonicalError::InvalidArgument`], never silently `false`.
///
/// # Examples
///
/// ```
/// use json_struct_unique::objects_equal;
/// use json_struct_value::Value;
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": 2}));
/// let b = Value::from(json!({"b": 2, "a": 1}));
/// assert!(objects_equal(&a, &b).unwrap());
/// ```
pub fn objects_equal(a: &Value, b: &Value) -> Result<bool, CanonicalError> {
    if !a.is_object() {
        return Err(CanonicalError::invalid_argument(TypeTag::Object, a));
    }
    if !b.is_object() {
        return Err(CanonicalError::invalid_argument(TypeTag::Object, b));
    }
    Ok(canonical_string(&sort_object(a)?)? == canonical_string(&sort_object(b)?)?)
}

/// Structural equality of two arrays under canonical ordering: element order
/// does not matter, multiplicity does.
///
/// Both arguments must be arrays; anything else is
/// [`CanonicalError::InvalidArgument`].
pub fn arrays_equal(a: &Value, b: &Value) -> Result<bool, CanonicalError> {
    if !a.is_array() {
        return Err(CanonicalError::invalid_argument(TypeTag::Array, a));
    }
    if !b.is_array() {
        return Err(CanonicalError::invalid_argument(TypeTag::Array, b));
    }
    Ok(canonical_string(&sort_array(a)?)? == canonical_string(&sort_array(b)?)?)
}

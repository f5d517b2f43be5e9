//! Linear search with a type-tag fast path.

use json_struct_canonical::CanonicalError;
use json_struct_value::{TypeTag, Value};

use crate::equal::{arrays_equal, objects_equal};

/// Find the first element of `haystack` at or after index `from` that is
/// structurally equal to `needle`. Returns the absolute index, or `None`
/// when the scan completes without a match.
///
/// Candidates whose type tag differs from the needle's are skipped without
/// deeper comparison. On a tag match, objects and arrays go through canonical
/// equality; every other kind compares by strict native equality, so `Null`
/// never matches `Undefined` and `1` never matches `"1"`.
///
/// The haystack is scanned by reference; the caller's array is not mutated.
///
/// # Examples
///
/// ```
/// use json_struct_unique::index_of;
/// use json_struct_value::Value;
/// use serde_json::json;
///
/// let haystack = Value::from(json!([0, 1, 2, 3]));
/// assert_eq!(index_of(&haystack, &Value::from(2), 2).unwrap(), Some(2));
/// assert_eq!(index_of(&haystack, &Value::from(2), 3).unwrap(), None);
/// ```
pub fn index_of(
    haystack: &Value,
    needle: &Value,
    from: usize,
) -> Result<Option<usize>, CanonicalError> {
    let items = match haystack {
        Value::Array(items) => items,
        other => return Err(CanonicalError::invalid_argument(TypeTag::Array, other)),
    };
    index_of_slice(items, needle, from)
}

pub(crate) fn index_of_slice(
    items: &[Value],
    needle: &Value,
    from: usize,
) -> Result<Option<usize>, CanonicalError> {
    let needle_tag = needle.type_tag();
    for (i, candidate) in items.iter().enumerate().skip(from) {
        if candidate.type_tag() != needle_tag {
            continue;
        }
        let matched = match needle_tag {
            TypeTag::Object => objects_equal(candidate, needle)?,
            TypeTag::Array => arrays_equal(candidate, needle)?,
            _ => candidate == needle,
        };
        if matched {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

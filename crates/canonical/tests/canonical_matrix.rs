//! Canonicalization matrix: key sorting, cross-type element ordering,
//! idempotence, depth limits, and error taxonomy.

use json_struct_canonical::{canonical_string, sort_array, sort_object, CanonicalError, MAX_DEPTH};
use json_struct_value::{TypeTag, Value};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ---------------------------------------------------------------------------
// Object key ordering
// ---------------------------------------------------------------------------

#[test]
fn object_keys_sorted_lexicographically() {
    let sorted = sort_object(&v(json!({"b": 1, "a": 2, "c": 0}))).unwrap();
    assert_eq!(
        canonical_string(&sorted).unwrap(),
        r#"{"a":2,"b":1,"c":0}"#
    );
}

#[test]
fn key_sort_is_bytewise() {
    // Uppercase sorts before lowercase in byte order.
    let sorted = sort_object(&v(json!({"a": 1, "B": 2}))).unwrap();
    assert_eq!(canonical_string(&sorted).unwrap(), r#"{"B":2,"a":1}"#);
}

#[test]
fn empty_object_is_its_own_canonical_form() {
    let sorted = sort_object(&v(json!({}))).unwrap();
    assert_eq!(sorted, v(json!({})));
}

#[test]
fn values_are_canonicalized_recursively() {
    let sorted = sort_object(&v(json!({"k": {"z": [2, 1], "a": 0}}))).unwrap();
    assert_eq!(
        canonical_string(&sorted).unwrap(),
        r#"{"k":{"a":0,"z":[1,2]}}"#
    );
}

// ---------------------------------------------------------------------------
// Array element ordering
// ---------------------------------------------------------------------------

#[test]
fn numbers_sort_numerically() {
    let sorted = sort_array(&v(json!([100, 21, 3]))).unwrap();
    assert_eq!(sorted, v(json!([3, 21, 100])));
}

#[test]
fn strings_sort_bytewise() {
    let sorted = sort_array(&v(json!(["b", "aa", "a"]))).unwrap();
    assert_eq!(sorted, v(json!(["a", "aa", "b"])));
}

#[test]
fn cross_type_rank_is_stable_and_total() {
    let sorted = sort_array(&v(json!([{"o": 1}, "s", [0], 2, true, null]))).unwrap();
    assert_eq!(sorted, v(json!([null, true, 2, "s", [0], {"o": 1}])));
}

#[test]
fn equal_containers_sort_adjacent() {
    let sorted = sort_array(&v(json!([{"b": 2, "a": 1}, 9, {"a": 1, "b": 2}]))).unwrap();
    assert_eq!(
        canonical_string(&sorted).unwrap(),
        r#"[9,{"a":1,"b":2},{"a":1,"b":2}]"#
    );
}

#[test]
fn duplicate_elements_are_kept() {
    let sorted = sort_array(&v(json!([1, 1, 1]))).unwrap();
    assert_eq!(sorted, v(json!([1, 1, 1])));
}

#[test]
fn empty_array_is_its_own_canonical_form() {
    let sorted = sort_array(&v(json!([]))).unwrap();
    assert_eq!(sorted, v(json!([])));
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn sort_array_is_idempotent() {
    let input = v(json!([[3, 1], {"b": [true, null], "a": "x"}, 2, "2"]));
    let once = sort_array(&input).unwrap();
    let twice = sort_array(&once).unwrap();
    assert_eq!(once, twice);
    assert_eq!(
        canonical_string(&once).unwrap(),
        canonical_string(&twice).unwrap()
    );
}

#[test]
fn sort_object_is_idempotent() {
    let input = v(json!({"z": [2, 1], "m": {"b": 1, "a": 2}, "a": null}));
    let once = sort_object(&input).unwrap();
    let twice = sort_object(&once).unwrap();
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[test]
fn sort_array_on_object_is_invalid_argument() {
    let err = sort_array(&v(json!({"a": 1}))).unwrap_err();
    match err {
        CanonicalError::InvalidArgument {
            expected, found, ..
        } => {
            assert_eq!(expected, TypeTag::Array);
            assert_eq!(found, TypeTag::Object);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn sort_object_on_primitive_is_invalid_argument() {
    let err = sort_object(&v(json!("text"))).unwrap_err();
    assert!(matches!(
        err,
        CanonicalError::InvalidArgument {
            expected: TypeTag::Object,
            found: TypeTag::String,
            ..
        }
    ));
}

#[test]
fn invalid_argument_message_names_both_tags() {
    let err = sort_array(&v(json!(null))).unwrap_err();
    assert_eq!(err.to_string(), "expected array, got null: null");
}

#[test]
fn nested_nan_is_type_mismatch() {
    let input = Value::Array(vec![Value::Object(
        [("k".to_string(), Value::Number(f64::NAN))]
            .into_iter()
            .collect(),
    )]);
    let err = sort_array(&input).unwrap_err();
    assert!(matches!(err, CanonicalError::TypeMismatch { .. }));
}

// ---------------------------------------------------------------------------
// Depth limit
// ---------------------------------------------------------------------------

#[test]
fn nesting_at_the_limit_succeeds() {
    let mut nested = Value::from(1);
    for _ in 0..MAX_DEPTH {
        nested = Value::Array(vec![nested]);
    }
    assert!(sort_array(&nested).is_ok());
}

#[test]
fn nesting_past_the_limit_is_reported() {
    let mut nested = Value::from(1);
    for _ in 0..(MAX_DEPTH + 8) {
        nested = Value::Array(vec![nested]);
    }
    let err = sort_array(&nested).unwrap_err();
    assert_eq!(err, CanonicalError::DepthLimit { max: MAX_DEPTH });
}

//! json-struct-value - Closed JSON-like value union.
//!
//! Defines [`Value`], the single conceptual type the rest of the workspace
//! operates over, and [`TypeTag`], its closed classification. Unlike
//! [`serde_json::Value`] this union carries a distinct `Undefined` variant and
//! an explicit cross-type tag order, both of which the canonicalization and
//! deduplication crates rely on.
//!
//! Values are plain owned trees: no interior mutability, no shared state, and
//! cycles are unconstructible by construction.

mod convert;

use std::fmt;

pub use indexmap::IndexMap;

/// Classification of a [`Value`], one tag per variant.
///
/// The derived [`Ord`] follows declaration order and doubles as the canonical
/// cross-type rank used when a mixed-kind array is sorted:
/// `Null < Undefined < Bool < Number < String < Array < Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Null,
    Undefined,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Null => "null",
            TypeTag::Undefined => "undefined",
            TypeTag::Bool => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        };
        f.write_str(name)
    }
}

/// A dynamically-typed nested value: primitives, arrays, and string-keyed
/// objects, nested arbitrarily.
///
/// Objects preserve insertion order ([`IndexMap`]), but that order is never
/// semantically meaningful; the derived equality compares objects as unordered
/// key-value sets, and canonicalization rewrites keys into sorted order.
///
/// Numbers are `f64`. Non-finite numbers are representable but fall outside
/// the comparable domain; the canonicalizer rejects them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Classify this value by its intrinsic variant.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Undefined => TypeTag::Undefined,
            Value::Bool(_) => TypeTag::Bool,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// True for any non-container value, including `Null` and `Undefined`.
    pub fn is_primitive(&self) -> bool {
        !self.is_container()
    }

    /// True for `Array` and `Object`.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_classification_is_total() {
        assert_eq!(Value::Null.type_tag(), TypeTag::Null);
        assert_eq!(Value::Undefined.type_tag(), TypeTag::Undefined);
        assert_eq!(Value::Bool(true).type_tag(), TypeTag::Bool);
        assert_eq!(Value::Number(1.5).type_tag(), TypeTag::Number);
        assert_eq!(Value::from("x").type_tag(), TypeTag::String);
        assert_eq!(Value::Array(vec![]).type_tag(), TypeTag::Array);
        assert_eq!(Value::Object(IndexMap::new()).type_tag(), TypeTag::Object);
    }

    #[test]
    fn tag_rank_order() {
        assert!(TypeTag::Null < TypeTag::Undefined);
        assert!(TypeTag::Undefined < TypeTag::Bool);
        assert!(TypeTag::Bool < TypeTag::Number);
        assert!(TypeTag::Number < TypeTag::String);
        assert!(TypeTag::String < TypeTag::Array);
        assert!(TypeTag::Array < TypeTag::Object);
    }

    #[test]
    fn null_and_undefined_are_distinct() {
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::Null.type_tag(), Value::Undefined.type_tag());
    }

    #[test]
    fn predicates() {
        assert!(Value::Array(vec![]).is_array());
        assert!(!Value::Array(vec![]).is_object());
        assert!(Value::Object(IndexMap::new()).is_object());
        assert!(Value::Null.is_primitive());
        assert!(Value::Undefined.is_primitive());
        assert!(Value::from(3).is_primitive());
        assert!(!Value::Array(vec![]).is_primitive());
        assert!(Value::Object(IndexMap::new()).is_container());
    }

    #[test]
    fn object_equality_ignores_insertion_order() {
        let mut a = IndexMap::new();
        a.insert("a".to_string(), Value::from(1));
        a.insert("b".to_string(), Value::from(2));
        let mut b = IndexMap::new();
        b.insert("b".to_string(), Value::from(2));
        b.insert("a".to_string(), Value::from(1));
        assert_eq!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn strict_equality_is_type_aware() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::Bool(false), Value::from(0));
    }
}

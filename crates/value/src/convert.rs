//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! Inbound conversion is lossless for everything JSON can express. Outbound
//! conversion is lossy in two documented spots: `Undefined` exports as `null`
//! (JSON has no undefined), and non-finite numbers export as `null` (JSON has
//! no NaN or infinities).

use serde_json::Value as JsonValue;

use crate::{IndexMap, Value};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            // as_f64 is total for standard serde_json numbers; integers above
            // 2^53 lose precision, same as they would in the source notation.
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Undefined => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Build an object from key-value pairs; later duplicates win, matching
    /// the unique-key invariant.
    pub fn object_from_pairs<I>(pairs: I) -> Value
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut entries = IndexMap::new();
        for (k, v) in pairs {
            entries.insert(k, v);
        }
        Value::Object(entries)
    }
}

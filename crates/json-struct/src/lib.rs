//! json-struct - Structural equality, canonical ordering, and deduplication
//! over heterogeneous nested values.
//!
//! Umbrella crate re-exporting the full public surface of the workspace:
//!
//! - [`Value`] and [`TypeTag`]: the closed value union and its classifier.
//! - [`sort_array`] / [`sort_object`]: canonicalization.
//! - [`canonical_string`]: the deterministic text encoding equality rests on.
//! - [`arrays_equal`] / [`objects_equal`]: canonical structural equality.
//! - [`index_of`]: linear search with a type-tag fast path.
//! - [`unique`]: first-seen deduplication.
//!
//! Every function is pure, synchronous, and reentrant; nothing here performs
//! I/O or touches shared state, so the whole surface is safe to call from any
//! number of threads at once.
//!
//! ```
//! use json_struct::{unique, Value};
//! use serde_json::json;
//!
//! let input = Value::from(json!([{"a": 1, "b": 2}, {"b": 2, "a": 1}, 5, 5]));
//! let out = unique(&input).unwrap();
//! assert_eq!(out, Value::from(json!([{"a": 1, "b": 2}, 5])));
//! ```

pub use json_struct_canonical::{canonical_string, sort_array, sort_object, CanonicalError, MAX_DEPTH};
pub use json_struct_unique::{arrays_equal, index_of, objects_equal, unique};
pub use json_struct_value::{IndexMap, TypeTag, Value};

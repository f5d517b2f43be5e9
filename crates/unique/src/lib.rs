//! json-struct-unique - Structural equality and first-seen deduplication.
//!
//! Builds on `json-struct-canonical`: two containers are equal iff their
//! canonical forms encode to identical text. [`index_of`] is a linear scan
//! with a type-tag fast path, and [`unique`] reduces an array to its distinct
//! members in first-appearance order.
//!
//! All functions are pure and reentrant; callers' values are never mutated.

mod equal;
mod locate;
mod uniq;

pub use equal::{arrays_equal, objects_equal};
pub use locate::index_of;
pub use uniq::unique;

pub use json_struct_canonical::CanonicalError;

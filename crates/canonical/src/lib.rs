//! json-struct-canonical - Canonical ordering for nested values.
//!
//! Rewrites arrays and objects into a deterministic canonical form: object
//! keys sorted lexicographically, array elements recursively canonicalized
//! and then sorted by an explicit cross-type total order. The canonical form
//! is the basis for structural equality in `json-struct-unique`.
//!
//! Canonicalization is idempotent: `sort_array(&sort_array(v)?)` returns the
//! same value. Recursion depth is capped at [`MAX_DEPTH`]; deeper input is
//! reported as [`CanonicalError::DepthLimit`] rather than overflowing the
//! stack.

mod error;
mod sort;
mod text;

pub use error::CanonicalError;
pub use sort::{sort_array, sort_object, MAX_DEPTH};
pub use text::canonical_string;

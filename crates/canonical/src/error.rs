use json_struct_value::{TypeTag, Value};
use thiserror::Error;

/// Failures surfaced by canonicalization and the operations built on it.
///
/// Every variant carries the offending value rendered to text, so a failure
/// is diagnosable without re-running the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanonicalError {
    /// A specific container variant was required and something else was passed.
    #[error("expected {expected}, got {found}: {value}")]
    InvalidArgument {
        expected: TypeTag,
        found: TypeTag,
        value: String,
    },
    /// A nested value falls outside the comparable domain
    /// (a non-finite number).
    #[error("value outside the comparable domain: {value}")]
    TypeMismatch { value: String },
    /// Nesting exceeds [`crate::MAX_DEPTH`].
    #[error("nesting depth exceeds the supported maximum of {max}")]
    DepthLimit { max: usize },
}

impl CanonicalError {
    /// Build an [`CanonicalError::InvalidArgument`] for a value of the wrong
    /// top-level variant.
    pub fn invalid_argument(expected: TypeTag, found: &Value) -> Self {
        // Canonical text where possible; values the encoder itself rejects
        // (non-finite numbers, over-deep nesting) fall back to JSON export.
        let value = crate::canonical_string(found)
            .unwrap_or_else(|_| serde_json::Value::from(found.clone()).to_string());
        CanonicalError::InvalidArgument {
            expected,
            found: found.type_tag(),
            value,
        }
    }

    pub(crate) fn type_mismatch(number: f64) -> Self {
        CanonicalError::TypeMismatch {
            value: number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_carries_rendered_value() {
        let err = CanonicalError::invalid_argument(TypeTag::Array, &Value::from(42));
        assert_eq!(err.to_string(), "expected array, got number: 42");
    }

    #[test]
    fn type_mismatch_renders_the_number() {
        let err = CanonicalError::type_mismatch(f64::NAN);
        assert_eq!(
            err.to_string(),
            "value outside the comparable domain: NaN"
        );
    }
}

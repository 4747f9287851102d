use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DottedError {
    /// A map key contains an unescaped `.`, or a map was addressed with a
    /// non-string key on write.
    #[error("{key:?} is not a valid key inside a dotted collection: {reason}")]
    InvalidKey { key: String, reason: &'static str },
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A non-numeric segment was used to address a sequence.
    #[error("{0:?} is not a valid sequence index")]
    InvalidIndex(String),
    /// A non-terminal segment resolved to a scalar.
    #[error("cannot reach {rest:?} through {segment:?}: intermediate value is a scalar")]
    PathTraversal { segment: String, rest: String },
    /// A value with no JSON representation, such as a NaN float.
    #[error("{value} cannot be stored: {reason}")]
    InvalidValue { value: String, reason: &'static str },
    #[error("invalid JSON: {0}")]
    Json(String),
}

impl DottedError {
    pub(crate) fn traversal(segment: &str, rest: impl ToString) -> Self {
        DottedError::PathTraversal {
            segment: segment.to_string(),
            rest: rest.to_string(),
        }
    }

    pub(crate) fn dotted_key(key: &str) -> Self {
        DottedError::InvalidKey {
            key: key.to_string(),
            reason: "keys must not contain an unescaped '.'",
        }
    }

    pub(crate) fn non_finite(n: f64) -> Self {
        DottedError::InvalidValue {
            value: n.to_string(),
            reason: "JSON numbers must be finite",
        }
    }

    pub(crate) fn non_string_key(index: usize) -> Self {
        DottedError::InvalidKey {
            key: index.to_string(),
            reason: "map keys must be strings",
        }
    }
}

impl From<serde_json::Error> for DottedError {
    fn from(e: serde_json::Error) -> Self {
        DottedError::Json(e.to_string())
    }
}

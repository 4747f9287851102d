//! Construction-time validation of plain values.

use serde_json::{Map, Value};

use crate::error::DottedError;
use crate::split::is_dotted_key;

/// Validates that no map key at any depth contains an unescaped `.`.
///
/// # Errors
///
/// Returns [`DottedError::InvalidKey`] for the first offending key found in
/// document order.
///
/// # Example
///
/// ```
/// use dotted::validate_value;
/// use serde_json::json;
///
/// validate_value(&json!({"a\\.b": [{"c": 1}]})).unwrap();
/// validate_value(&json!([{"a.b": 1}])).unwrap_err();
/// ```
pub fn validate_value(value: &Value) -> Result<(), DottedError> {
    match value {
        Value::Array(items) => items.iter().try_for_each(validate_value),
        Value::Object(map) => validate_entries(map),
        _ => Ok(()),
    }
}

/// Validates the keys and values of a plain object.
pub(crate) fn validate_entries(map: &Map<String, Value>) -> Result<(), DottedError> {
    for (key, item) in map {
        if is_dotted_key(key) {
            tracing::debug!(key = %key, "rejecting dotted key");
            return Err(DottedError::dotted_key(key));
        }
        validate_value(item)?;
    }
    Ok(())
}

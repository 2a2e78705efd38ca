//! Presence check shared by the marshaller and the query encoder.

use serde_json::Value;

/// Whether `value` carries meaning.
///
/// `null` and blank strings are absent. Everything else is present,
/// including `0`, `false` and empty arrays or objects.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => true,
    }
}

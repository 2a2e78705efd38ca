//! Error types for the hearthis.at API client.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to hearthis.at or marshalling its
/// responses.
#[derive(Debug, Error)]
pub enum HearthisError {
    /// HTTP transport error (connection refused, timeout, non-2xx status, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON, or a coerced record could not
    /// be turned into its Rust type.
    ///
    /// Fields without a coercion rule (`liked`, `premium`, `allow_push`, ...)
    /// are checked only here: a value such as `"maybe"` in a flag field
    /// surfaces as this variant, not as [`HearthisError::InvalidValue`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with an error envelope (`"success": false`).
    #[error("API error: {message}")]
    Api {
        /// Human-readable error message from the API.
        message: String,
    },

    /// A page size above the platform ceiling was requested. Raised before
    /// any network interaction.
    #[error("maximum allowed pagecount is {max}, got {count}")]
    PageCountExceeded {
        /// The page size the caller asked for.
        count: u32,
        /// The platform ceiling.
        max: u32,
    },

    /// A raw field value could not be coerced to its semantic type.
    #[error("invalid value for field `{field}`: {value}")]
    InvalidValue {
        /// Field name the coercion rule was selected by.
        field: String,
        /// The offending raw value.
        value: Value,
    },

    /// The payload handed to the marshaller does not have the expected
    /// structure, usually because the service returned an error or limit
    /// response instead of data.
    #[error("shape mismatch for {shape}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Name of the record shape being built.
        shape: &'static str,
        /// What the marshaller needed (`object`, `array`).
        expected: &'static str,
        /// JSON kind that was actually present.
        found: &'static str,
    },
}

impl HearthisError {
    pub(crate) fn invalid(field: &str, value: &Value) -> Self {
        Self::InvalidValue {
            field: field.to_owned(),
            value: value.clone(),
        }
    }

    pub(crate) fn shape(shape: &'static str, expected: &'static str, found: &Value) -> Self {
        Self::ShapeMismatch {
            shape,
            expected,
            found: json_kind(found),
        }
    }
}

/// Short name of a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convenience alias for `Result<T, HearthisError>`.
pub type Result<T> = std::result::Result<T, HearthisError>;

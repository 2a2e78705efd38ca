//! Query string and form body encoding.
//!
//! A request description is serialized to an order-preserving JSON object,
//! absent fields are dropped, and the rest is percent-encoded:
//!
//! ```
//! use hearthis_api::query::encode;
//! use hearthis_api::request::LoginRequest;
//!
//! let query = encode(&LoginRequest::new("test@test.de", "mypassword")).unwrap();
//! assert_eq!(query, "email=test%40test.de&password=mypassword");
//! ```

use crate::error::{HearthisError, Result};
use crate::filter::is_present;
use serde::Serialize;
use serde_json::Value;

/// Encode `request` as `key=value` pairs joined by `&`, in field order.
///
/// Fields judged absent by [`is_present`] are left out entirely. Output is
/// deterministic for equal input.
pub fn encode<T: Serialize>(request: &T) -> Result<String> {
    let fields = match serde_json::to_value(request)? {
        Value::Object(fields) => fields,
        // `()`: no parameters.
        Value::Null => return Ok(String::new()),
        other => return Err(HearthisError::shape("request", "object", &other)),
    };

    let pairs: Vec<String> = fields
        .iter()
        .filter(|(_, value)| is_present(value))
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&render(value))
            )
        })
        .collect();
    Ok(pairs.join("&"))
}

/// Append the encoded query to `url`, adding `?` only when there is one.
pub fn with_query<T: Serialize>(url: &str, request: &T) -> Result<String> {
    let query = encode(request)?;
    if query.is_empty() {
        Ok(url.to_owned())
    } else {
        Ok(format!("{url}?{query}"))
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_owned(),
        Value::Bool(false) => "0".to_owned(),
        other => other.to_string(),
    }
}

//! Lenient field deserializers for pass-through values.
//!
//! Fields without a coercion rule reach the record as hearthis.at sent
//! them. These helpers give them a stable Rust type without failing on the
//! API's habit of mixing strings, numbers and `null`.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Text field: `null` becomes `""`, numbers and booleans are stringified.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Boolean flag: accepts `true`/`false`, `0`/`1`, `"0"`/`"1"`,
/// `"true"`/`"false"`; `null` and blank strings are `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(D::Error::custom(format!("expected flag, found {other:?}"))),
        },
        other => Err(D::Error::custom(format!("expected flag, found {other}"))),
    }
}

/// Unsigned number without a coercion rule (timestamps, push settings):
/// `null` and blank strings are `0`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("expected unsigned number, found {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected unsigned number, found {s:?}"))),
        other => Err(D::Error::custom(format!("expected unsigned number, found {other}"))),
    }
}

/// List of strings: `null` becomes an empty list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// List of floats: numbers or numeric strings; `null` becomes an empty list.
pub(crate) fn float_list<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .iter()
        .map(|item| {
            let parsed = match item {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            };
            parsed.ok_or_else(|| D::Error::custom(format!("expected float, found {item}")))
        })
        .collect()
}

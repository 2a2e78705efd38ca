//! Field-name driven type coercion.
//!
//! hearthis.at is loose about scalar types: ids arrive as `"48250"` or
//! `48250`, the `downloadable` flag as `1` or `"1"`, counters as `null`.
//! Every raw scalar passes through [`coerce`] before it reaches a typed
//! record. The rule is picked by field name only, so the same table
//! applies to every record shape:
//!
//! | field name                                         | rule            |
//! |----------------------------------------------------|-----------------|
//! | `downloadable`                                     | [`Rule::Flag`]    |
//! | `bpm`                                              | [`Rule::Float`]   |
//! | `id`, `user_id`, `duration`, `release_timestamp`,  | [`Rule::Integer`] |
//! | `track_id`, `set`, `set_id`, anything with `_count` |                 |
//! | everything else                                    | [`Rule::PassThrough`] |

use crate::error::{HearthisError, Result};
use serde_json::{Number, Value};

const INTEGER_FIELDS: &[&str] = &[
    "id",
    "user_id",
    "duration",
    "release_timestamp",
    "track_id",
    "set",
    "set_id",
];

/// Coercion applied to a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `true` iff the raw value is `1` or `"1"`.
    Flag,
    /// Floating point; `null` means absent.
    Float,
    /// Non-negative integer; `null` means `0`.
    Integer,
    /// Returned unchanged.
    PassThrough,
}

/// Look up the coercion rule for a field name.
pub fn rule_for(field: &str) -> Rule {
    if field == "downloadable" {
        Rule::Flag
    } else if field == "bpm" {
        Rule::Float
    } else if INTEGER_FIELDS.contains(&field) || field.contains("_count") {
        Rule::Integer
    } else {
        Rule::PassThrough
    }
}

/// Coerce `raw` to the semantic type of `field`.
///
/// Coercion is idempotent: feeding an already coerced value back in
/// returns it unchanged.
pub fn coerce(field: &str, raw: &Value) -> Result<Value> {
    match rule_for(field) {
        Rule::Flag => Ok(Value::Bool(to_flag(raw))),
        Rule::Float => to_float(raw).ok_or_else(|| HearthisError::invalid(field, raw)),
        Rule::Integer => to_integer(raw)
            .map(Value::from)
            .ok_or_else(|| HearthisError::invalid(field, raw)),
        Rule::PassThrough => Ok(raw.clone()),
    }
}

fn to_flag(raw: &Value) -> bool {
    match raw {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "1",
        _ => false,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_integer(raw: &Value) -> Option<u64> {
    match raw {
        Value::Null => Some(0),
        Value::Number(n) => n.as_u64().or_else(|| {
            let f = n.as_f64()?;
            // 2^64 as f64; anything at or above it would saturate.
            (f >= 0.0 && f.fract() == 0.0 && f < 18_446_744_073_709_551_616.0).then_some(f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn to_float(raw: &Value) -> Option<Value> {
    match raw {
        Value::Null => Some(Value::Null),
        Value::Number(n) => n.as_f64().and_then(Number::from_f64).map(Value::Number),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rules_are_picked_by_name() {
        assert_eq!(rule_for("downloadable"), Rule::Flag);
        assert_eq!(rule_for("bpm"), Rule::Float);
        for name in ["id", "user_id", "duration", "release_timestamp", "track_id", "set", "set_id"] {
            assert_eq!(rule_for(name), Rule::Integer, "{name}");
        }
        assert_eq!(rule_for("favoritings_count"), Rule::Integer);
        assert_eq!(rule_for("comment_count"), Rule::Integer);
        assert_eq!(rule_for("title"), Rule::PassThrough);
        assert_eq!(rule_for("counts"), Rule::PassThrough);
        assert_eq!(rule_for("liked"), Rule::PassThrough);
    }

    #[test]
    fn downloadable_accepts_one_in_both_encodings() {
        assert_eq!(coerce("downloadable", &json!(1)).unwrap(), json!(true));
        assert_eq!(coerce("downloadable", &json!("1")).unwrap(), json!(true));
        assert_eq!(coerce("downloadable", &json!(0)).unwrap(), json!(false));
        assert_eq!(coerce("downloadable", &json!("0")).unwrap(), json!(false));
        assert_eq!(coerce("downloadable", &Value::Null).unwrap(), json!(false));
        assert_eq!(coerce("downloadable", &json!("yes")).unwrap(), json!(false));
    }

    #[test]
    fn null_counters_become_zero() {
        assert_eq!(coerce("favoritings_count", &Value::Null).unwrap(), json!(0));
        assert_eq!(coerce("id", &Value::Null).unwrap(), json!(0));
    }

    #[test]
    fn stringified_integers_are_parsed() {
        assert_eq!(coerce("id", &json!("48250")).unwrap(), json!(48250));
        assert_eq!(coerce("playback_count", &json!(" 12 ")).unwrap(), json!(12));
        assert_eq!(coerce("duration", &json!(3600.0)).unwrap(), json!(3600));
    }

    #[test]
    fn unparsable_integers_are_rejected() {
        for raw in [json!("abc"), json!(""), json!(-1), json!(1.5), json!(true), json!([1])] {
            let err = coerce("track_id", &raw).unwrap_err();
            assert!(
                matches!(err, HearthisError::InvalidValue { ref field, .. } if field == "track_id"),
                "{raw}"
            );
        }
    }

    #[test]
    fn bpm_is_parsed_as_float() {
        assert_eq!(coerce("bpm", &json!("128.5")).unwrap(), json!(128.5));
        assert_eq!(coerce("bpm", &json!(90)).unwrap(), json!(90.0));
        assert_eq!(coerce("bpm", &Value::Null).unwrap(), Value::Null);
        for raw in [json!("fast"), json!(""), json!("  "), json!(true)] {
            assert!(
                matches!(coerce("bpm", &raw), Err(HearthisError::InvalidValue { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn other_fields_pass_through() {
        let raw = json!({"nested": [1, "two"]});
        assert_eq!(coerce("counts", &raw).unwrap(), raw);
        assert_eq!(coerce("title", &json!("Back In Time")).unwrap(), json!("Back In Time"));
        assert_eq!(coerce("caption", &Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn coercion_is_idempotent() {
        let cases = [
            ("downloadable", json!("1")),
            ("downloadable", json!(0)),
            ("bpm", json!("120")),
            ("bpm", Value::Null),
            ("id", json!("42")),
            ("likes_count", Value::Null),
            ("set", json!(438.0)),
            ("title", json!("x")),
        ];
        for (field, raw) in cases {
            let once = coerce(field, &raw).unwrap();
            let twice = coerce(field, &once).unwrap();
            assert_eq!(once, twice, "{field}: {raw}");
        }
    }
}

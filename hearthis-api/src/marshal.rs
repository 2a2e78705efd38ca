//! Raw JSON to typed record conversion.
//!
//! A [`Shape`] lists the fields a record owns and how each one is built.
//! [`marshal_fields`] walks that list over a raw JSON object, coerces every
//! scalar with [`coerce`](crate::coerce::coerce) and recurses into nested
//! records. The resulting canonical object is then handed to serde, so the
//! Rust struct only ever sees well-typed values.
//!
//! Keys in the raw payload that the shape does not declare are dropped.

use crate::coerce::coerce;
use crate::error::{HearthisError, Result};
use crate::filter::is_present;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// How a declared field is built from its raw value.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A scalar, coerced by field name.
    Value,
    /// A nested object marshalled with the given shape.
    Record(&'static Shape),
    /// An array of nested objects, each marshalled with the given shape.
    RecordList(&'static Shape),
}

/// One declared field of a [`Shape`].
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Key in the raw payload.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Value,
        }
    }

    pub const fn record(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            kind: FieldKind::Record(shape),
        }
    }

    pub const fn record_list(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            kind: FieldKind::RecordList(shape),
        }
    }
}

/// The fixed field list of a record type.
#[derive(Debug)]
pub struct Shape {
    /// Record name, reported in [`HearthisError::ShapeMismatch`].
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// A typed record that can be built by the marshaller.
///
/// The `Deserialize` impl must accept the canonical object produced by
/// [`marshal_fields`] for [`Record::shape`].
pub trait Record: DeserializeOwned {
    fn shape() -> &'static Shape;
}

/// Build the canonical object for `shape` from `raw`.
///
/// Every declared field is looked up in `raw` (a missing key reads as
/// `null`). With `omit_absent` set, fields whose raw value is absent are
/// left out instead of being defaulted.
pub fn marshal_fields(
    shape: &'static Shape,
    raw: &Value,
    omit_absent: bool,
) -> Result<Map<String, Value>> {
    let Value::Object(raw) = raw else {
        return Err(HearthisError::shape(shape.name, "object", raw));
    };

    let mut out = Map::with_capacity(shape.fields.len());
    for field in shape.fields {
        let value = raw.get(field.name).unwrap_or(&Value::Null);
        if omit_absent && !is_present(value) {
            continue;
        }
        let typed = match field.kind {
            FieldKind::Value => coerce(field.name, value)?,
            FieldKind::Record(nested) => match value {
                Value::Null => Value::Null,
                other => Value::Object(marshal_fields(nested, other, omit_absent)?),
            },
            FieldKind::RecordList(nested) => match value {
                Value::Null => Value::Array(Vec::new()),
                Value::Array(items) => Value::Array(
                    items
                        .iter()
                        .map(|item| marshal_fields(nested, item, omit_absent).map(Value::Object))
                        .collect::<Result<_>>()?,
                ),
                other => return Err(HearthisError::shape(nested.name, "array", other)),
            },
        };
        out.insert(field.name.to_owned(), typed);
    }
    Ok(out)
}

/// Marshal a full record; every declared field is populated.
pub fn marshal<R: Record>(raw: &Value) -> Result<R> {
    let fields = marshal_fields(R::shape(), raw, false)?;
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Marshal a partial record; absent fields fall back to the type's
/// `Default` rather than to a coerced value.
pub fn marshal_partial<R: Record>(raw: &Value) -> Result<R> {
    let fields = marshal_fields(R::shape(), raw, true)?;
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Marshal an array of raw objects, preserving order.
pub fn marshal_list<R: Record>(raw: &Value) -> Result<Vec<R>> {
    let Value::Array(items) = raw else {
        return Err(HearthisError::shape(R::shape().name, "array", raw));
    };
    items.iter().map(marshal).collect()
}

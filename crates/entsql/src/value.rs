//! Bound values carried alongside rendered SQL.
//!
//! Every placeholder written by a predicate or the statement assembler is
//! matched by one [`Value`] in the parallel value list. Values have two text
//! forms, both for display only:
//!
//! - [`Display`](std::fmt::Display): the bare form used by
//!   [`Predicate`](crate::Predicate)'s debug rendering (no quoting).
//! - [`Value::debug_literal`]: the statement debug form, where text and
//!   timestamps are single-quoted.
//!
//! Neither form escapes anything. Do not execute the output.

#[cfg(feature = "postgres")]
mod postgres;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use std::fmt;
use uuid::Uuid;

/// A bound statement value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the integer payload, if any.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Render for statement debug output: text and timestamps single-quoted,
    /// everything else in its bare form.
    pub fn debug_literal(&self) -> String {
        match self {
            Value::Text(s) => format!("'{s}'"),
            Value::Timestamp(ts) => format!("'{}'", format_timestamp(ts)),
            other => other.to_string(),
        }
    }
}

/// Fixed-width RFC 3339 timestamp with nanosecond fraction and `Z` suffix.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Timestamp(v) => f.write_str(&format_timestamp(v)),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Json(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

/// Naive timestamps are taken as UTC.
impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v.and_utc())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Replace each `?` in `sql` with the next value, in order.
///
/// `quote` selects between [`Value::debug_literal`] and the bare
/// [`Display`](fmt::Display) form. A placeholder with no value left is kept as
/// `?`; surplus values are ignored.
pub(crate) fn substitute_placeholders(sql: &str, values: &[Value], quote: bool) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut values = values.iter();
    for ch in sql.chars() {
        if ch != crate::token::PLACEHOLDER_CHAR {
            out.push(ch);
            continue;
        }
        match values.next() {
            Some(v) if quote => out.push_str(&v.debug_literal()),
            Some(v) => out.push_str(&v.to_string()),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn text_is_quoted_only_in_debug_literal() {
        let v = Value::from("x");
        assert_eq!(v.to_string(), "x");
        assert_eq!(v.debug_literal(), "'x'");
    }

    #[test]
    fn timestamp_uses_fixed_fraction() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let v = Value::from(ts);
        assert_eq!(v.to_string(), "2024-01-02T03:04:05.000000000Z");
        assert_eq!(v.debug_literal(), "'2024-01-02T03:04:05.000000000Z'");
    }

    #[test]
    fn numbers_render_bare() {
        assert_eq!(Value::from(42_i32).debug_literal(), "42");
        assert_eq!(Value::from(1.5_f64).debug_literal(), "1.5");
        assert_eq!(Value::from(true).debug_literal(), "true");
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
        assert_eq!(Value::Null.debug_literal(), "NULL");
    }

    #[test]
    fn substitution_keeps_unmatched_placeholders() {
        let values = vec![Value::from(1)];
        assert_eq!(substitute_placeholders("a = ? AND b = ?", &values, true), "a = 1 AND b = ?");
    }
}

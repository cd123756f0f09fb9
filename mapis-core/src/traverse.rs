//! Field access over dynamically shaped values.
//!
//! [`Traverse`] is what a value type implements so that a string [`Path`]
//! can walk it. `serde_json::Value` implements it with the `json` feature;
//! user document types can implement it directly.
//!
//! [`Path`]: crate::Path

use std::{borrow::Cow, fmt};

/// Coarse classification of a value, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// An ordered sequence.
    Array,
    /// A keyed collection of fields.
    Object,
    /// Anything else.
    Other,
}

impl ValueKind {
    /// Whether a field can be read from values of this kind.
    pub const fn is_indexable(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "a boolean",
            ValueKind::Number => "a number",
            ValueKind::String => "a string",
            ValueKind::Array => "an array",
            ValueKind::Object => "an object",
            ValueKind::Other => "an opaque value",
        })
    }
}

/// A value that can be walked one named field at a time.
pub trait Traverse {
    /// Classify this value.
    fn kind(&self) -> ValueKind;

    /// Read the field called `name`.
    ///
    /// Only called when [`kind`](Self::kind) is indexable. Arrays are indexed
    /// by the canonical decimal rendering of the position: no sign, no
    /// leading zeros.
    fn field(&self, name: &str) -> Option<&Self>;

    /// Render this value as a selector key, if it is key-like.
    fn as_key(&self) -> Option<Cow<'_, str>>;
}

#[cfg(feature = "json")]
impl Traverse for serde_json::Value {
    fn kind(&self) -> ValueKind {
        match self {
            serde_json::Value::Null => ValueKind::Null,
            serde_json::Value::Bool(_) => ValueKind::Bool,
            serde_json::Value::Number(_) => ValueKind::Number,
            serde_json::Value::String(_) => ValueKind::String,
            serde_json::Value::Array(_) => ValueKind::Array,
            serde_json::Value::Object(_) => ValueKind::Object,
        }
    }

    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(name),
            serde_json::Value::Array(items) => array_index(name).and_then(|index| items.get(index)),
            _ => None,
        }
    }

    fn as_key(&self) -> Option<Cow<'_, str>> {
        match self {
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            serde_json::Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            serde_json::Value::Number(n) => Some(Cow::Owned(number_key(n))),
            _ => None,
        }
    }
}

/// Parse an array position written as `0` or digits without a leading zero.
#[cfg(feature = "json")]
fn array_index(name: &str) -> Option<usize> {
    let canonical = name == "0"
        || (!name.is_empty()
            && !name.starts_with('0')
            && name.bytes().all(|b| b.is_ascii_digit()));
    if canonical { name.parse().ok() } else { None }
}

/// Integral floats render like integers so `2.0` selects the same handler as `2`.
#[cfg(feature = "json")]
fn number_key(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f)
            if n.is_f64()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
        {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kinds() {
        assert_eq!(json!(null).kind(), ValueKind::Null);
        assert_eq!(json!({"a": 1}).kind(), ValueKind::Object);
        assert!(json!([1, 2]).kind().is_indexable());
        assert!(!json!("circle").kind().is_indexable());
    }

    #[test]
    fn test_json_field_access() {
        let value = json!({"shape": {"kind": "circle"}, "items": ["a", "b"]});
        let shape = value.field("shape").unwrap();
        assert_eq!(shape.field("kind"), Some(&json!("circle")));
        assert_eq!(value.field("missing"), None);
        assert_eq!(value.field("items").unwrap().field("1"), Some(&json!("b")));
        assert_eq!(value.field("items").unwrap().field("x"), None);
    }

    #[test]
    fn test_json_array_index_is_canonical() {
        let items = json!(["a", "b"]);
        assert_eq!(items.field("0"), Some(&json!("a")));
        assert_eq!(items.field("1"), Some(&json!("b")));
        assert_eq!(items.field("+1"), None);
        assert_eq!(items.field("01"), None);
        assert_eq!(items.field("00"), None);
        assert_eq!(items.field(""), None);
        assert_eq!(items.field("2"), None);
    }

    #[test]
    fn test_json_keys() {
        assert_eq!(json!("circle").as_key().as_deref(), Some("circle"));
        assert_eq!(json!(true).as_key().as_deref(), Some("true"));
        assert_eq!(json!(3).as_key().as_deref(), Some("3"));
        assert_eq!(json!(-4).as_key().as_deref(), Some("-4"));
        assert_eq!(json!(2.0).as_key().as_deref(), Some("2"));
        assert_eq!(json!(-0.0).as_key().as_deref(), Some("0"));
        assert_eq!(json!(2.5).as_key().as_deref(), Some("2.5"));
        assert_eq!(json!(null).as_key(), None);
        assert_eq!(json!({"k": 1}).as_key(), None);
    }
}

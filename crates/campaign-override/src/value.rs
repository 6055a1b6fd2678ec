//! Scalar value types that can be overridden
//!
//! [`OverridableValue`] is the small per-type adapter used by the shared rule
//! engine: it knows how to recognise the type's scalar shorthand in a raw
//! document value, and what the value is when no rule matches.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scalar type usable as the value of an overridable rule.
pub trait OverridableValue:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned
{
    /// Name of the type, used in error messages.
    const KIND: &'static str;

    /// The value when no rule matches.
    fn zero() -> Self;

    /// Interpret a raw document value as this scalar type, if it is one.
    fn from_scalar(raw: &Value) -> Option<Self>;
}

impl OverridableValue for bool {
    const KIND: &'static str = "boolean";

    fn zero() -> Self {
        false
    }

    fn from_scalar(raw: &Value) -> Option<Self> {
        raw.as_bool()
    }
}

impl OverridableValue for String {
    const KIND: &'static str = "string";

    fn zero() -> Self {
        String::new()
    }

    // Structured documents coerce unquoted scalars such as `42` to strings.
    fn from_scalar(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// A value that is either a boolean or a string, such as the `published`
/// field of a changeset template (`true`, `false` or `"draft"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrString {
    Bool(bool),
    String(String),
}

impl BoolOrString {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BoolOrString::Bool(b) => Some(*b),
            BoolOrString::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoolOrString::Bool(_) => None,
            BoolOrString::String(s) => Some(s),
        }
    }
}

impl Default for BoolOrString {
    fn default() -> Self {
        BoolOrString::Bool(false)
    }
}

impl From<bool> for BoolOrString {
    fn from(b: bool) -> Self {
        BoolOrString::Bool(b)
    }
}

impl From<&str> for BoolOrString {
    fn from(s: &str) -> Self {
        BoolOrString::String(s.to_string())
    }
}

impl From<String> for BoolOrString {
    fn from(s: String) -> Self {
        BoolOrString::String(s)
    }
}

impl fmt::Display for BoolOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolOrString::Bool(b) => write!(f, "{}", b),
            BoolOrString::String(s) => f.write_str(s),
        }
    }
}

impl OverridableValue for BoolOrString {
    const KIND: &'static str = "boolean or string";

    fn zero() -> Self {
        Self::default()
    }

    fn from_scalar(raw: &Value) -> Option<Self> {
        match raw {
            Value::Bool(b) => Some(BoolOrString::Bool(*b)),
            Value::String(s) => Some(BoolOrString::String(s.clone())),
            _ => None,
        }
    }
}

/// Describe the shape of a raw value for error messages.
pub(crate) fn describe(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

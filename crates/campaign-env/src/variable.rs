//! A single environment variable declaration

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// A declared variable: either a literal, or a name looked up in the outer
/// environment when the step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value: Option<String>,
}

impl Variable {
    /// A variable copied from the outer environment.
    pub fn lookup(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A variable bound to a literal value.
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The literal value, or `None` if it comes from the outer environment.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Decode one entry of the array form: `"NAME"` or `{"NAME": "value"}`.
    pub(crate) fn decode(index: usize, raw: &Value) -> Result<Self> {
        match raw {
            Value::String(name) => Ok(Self::lookup(name.clone())),
            Value::Object(map) => match (map.len(), map.iter().next()) {
                (1, Some((name, value))) => Ok(Self::literal(name.clone(), scalar(name, value)?)),
                (count, _) => Err(Error::VariableArity { index, count }),
            },
            _ => Err(Error::shape(format!(
                "entry {} must be a variable name or a single-key mapping",
                index
            ))),
        }
    }
}

/// Literal values are strings; unquoted numbers and booleans are kept as text.
pub(crate) fn scalar(name: &str, raw: &Value) -> Result<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::shape(format!("value of {:?} must be a string", name))),
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.value {
            None => serializer.serialize_str(&self.name),
            Some(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&self.name, value)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_lookup() {
        let var = Variable::decode(0, &json!("HOME")).unwrap();
        assert_eq!(var, Variable::lookup("HOME"));
        assert_eq!(var.value(), None);
    }

    #[test]
    fn test_decode_literal() {
        let var = Variable::decode(0, &json!({"LANG": "C"})).unwrap();
        assert_eq!(var.name(), "LANG");
        assert_eq!(var.value(), Some("C"));
    }

    #[test]
    fn test_decode_number_literal() {
        let var = Variable::decode(0, &json!({"RETRIES": 3})).unwrap();
        assert_eq!(var.value(), Some("3"));
    }

    #[test]
    fn test_decode_arity() {
        let err = Variable::decode(2, &json!({"A": "1", "B": "2"})).unwrap_err();
        assert!(matches!(err, Error::VariableArity { index: 2, count: 2 }));
    }

    #[test]
    fn test_decode_rejects_nested() {
        assert!(Variable::decode(0, &json!({"A": ["x"]})).is_err());
        assert!(Variable::decode(0, &json!(42)).is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Variable::lookup("HOME")).unwrap(),
            r#""HOME""#
        );
        assert_eq!(
            serde_json::to_string(&Variable::literal("LANG", "C")).unwrap(),
            r#"{"LANG":"C"}"#
        );
    }
}

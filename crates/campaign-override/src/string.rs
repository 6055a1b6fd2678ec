//! Overridable strings
//!
//! Wire shapes:
//!
//! ```yaml
//! branch: my-branch
//! ---
//! branch:
//!   default: my-branch
//!   except:
//!     - github.com/sourcegraph/*: sg-branch
//! ```
//!
//! `except` rules follow the same last-match-wins order as every other rule
//! list. Only a string without exceptions is written back as a plain scalar;
//! otherwise the full form, including `default`, is written.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, Attempt, AttemptFn, RuleList};
use crate::error::{Error, Result};
use crate::rule::RuleSet;
use crate::value::{OverridableValue, describe};

const KIND: &str = <String as OverridableValue>::KIND;

/// A string with a default that can be overridden per repository.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverridableString {
    default: String,
    rules: RuleSet<String>,
}

impl OverridableString {
    /// A static string that applies to every repository.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            rules: RuleSet::new(),
        }
    }

    /// A default plus `(pattern, value)` exceptions in declaration order.
    pub fn with_rules<I, P, S>(default: impl Into<String>, except: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<String>,
        S: Into<String>,
    {
        Ok(Self {
            default: default.into(),
            rules: RuleSet::compile(except.into_iter().map(|(p, s)| (p, s.into())))?,
        })
    }

    /// The effective value for the named repository.
    pub fn value(&self, name: &str) -> &str {
        self.rules
            .resolve(name)
            .map(String::as_str)
            .unwrap_or(self.default.as_str())
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn rules(&self) -> &RuleSet<String> {
        &self.rules
    }

    /// Decode from a raw document value.
    pub fn decode(raw: &Value) -> Result<Self> {
        let attempts: [AttemptFn<Self>; 2] = [Self::scalar_attempt, Self::object_attempt];
        codec::decode_with(KIND, raw, &attempts)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(input)?;
        Self::decode(&raw)
    }

    pub fn from_yaml(input: &str) -> Result<Self> {
        let raw: Value = serde_yaml::from_str(input)?;
        Self::decode(&raw)
    }

    fn scalar_attempt(raw: &Value) -> Attempt<Self> {
        match String::from_scalar(raw) {
            Some(default) => Attempt::Decoded(Self::new(default)),
            None => Attempt::Declined(Error::shape(
                KIND,
                format!("expected a string, found {}", describe(raw)),
            )),
        }
    }

    // Unknown fields are ignored; only `default` and `except` are read.
    fn object_attempt(raw: &Value) -> Attempt<Self> {
        let Some(fields) = raw.as_object() else {
            return Attempt::Declined(Error::shape(
                KIND,
                format!(
                    "expected a string or a mapping with default and except, found {}",
                    describe(raw)
                ),
            ));
        };

        let default = match fields.get("default") {
            None | Some(Value::Null) => String::new(),
            Some(value) => match String::from_scalar(value) {
                Some(default) => default,
                None => {
                    return Attempt::Failed(Error::shape(
                        KIND,
                        format!("default must be a string, found {}", describe(value)),
                    ));
                }
            },
        };

        let rules = match fields.get("except") {
            None | Some(Value::Null) => Ok(RuleSet::new()),
            Some(except) => codec::decode_rules(except),
        };

        Attempt::from_result(rules.map(|rules| Self { default, rules }))
    }
}

impl From<&str> for OverridableString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OverridableString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for OverridableString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.rules.is_empty() {
            return serializer.serialize_str(&self.default);
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("default", &self.default)?;
        map.serialize_entry("except", &RuleList(&self.rules))?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for OverridableString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}

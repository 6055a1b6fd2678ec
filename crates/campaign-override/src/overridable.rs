//! Overridable values in list form
//!
//! Wire shapes:
//!
//! ```json
//! true
//! [{"*": false}, {"github.com/sourcegraph/*": true}]
//! ```
//!
//! A rule set that is empty, or holds a single `*` rule, is written back as
//! the plain scalar; anything else is written as the full list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, Attempt, AttemptFn, RuleList};
use crate::error::{Error, Result};
use crate::rule::RuleSet;
use crate::value::{BoolOrString, OverridableValue, describe};

/// A value that can be overridden per repository with last-match-wins rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Overridable<V> {
    rules: RuleSet<V>,
}

/// A boolean that can be overridden per repository.
pub type Bool = Overridable<bool>;

/// The `published` field of a changeset template: a boolean or a string such
/// as `"draft"`, overridable per repository.
pub type Published = Overridable<BoolOrString>;

impl<V: OverridableValue> Overridable<V> {
    /// A static value that applies to every repository.
    pub fn from_value(value: V) -> Self {
        Self {
            rules: RuleSet::scalar(value),
        }
    }

    /// Build from `(pattern, value)` pairs in declaration order.
    pub fn from_rules<I, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
    {
        Ok(Self {
            rules: RuleSet::compile(entries)?,
        })
    }

    /// The effective value for the named repository.
    pub fn value(&self, name: &str) -> V {
        self.rules.resolve(name).cloned().unwrap_or_else(V::zero)
    }

    pub fn rules(&self) -> &RuleSet<V> {
        &self.rules
    }

    /// Decode from a raw document value.
    pub fn decode(raw: &Value) -> Result<Self> {
        let attempts: [AttemptFn<Self>; 2] = [Self::scalar_attempt, Self::list_attempt];
        codec::decode_with(V::KIND, raw, &attempts)
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
        match V::from_scalar(raw) {
            Some(value) => Attempt::Decoded(Self::from_value(value)),
            None => Attempt::Declined(Error::shape(
                V::KIND,
                format!("expected a {}, found {}", V::KIND, describe(raw)),
            )),
        }
    }

    fn list_attempt(raw: &Value) -> Attempt<Self> {
        if !raw.is_array() {
            return Attempt::Declined(Error::shape(
                V::KIND,
                format!(
                    "expected a {} or a list of single-key mappings, found {}",
                    V::KIND,
                    describe(raw)
                ),
            ));
        }
        Attempt::from_result(codec::decode_rules(raw).map(|rules| Self { rules }))
    }
}

impl Overridable<bool> {
    /// Whether the value is true for the named repository.
    pub fn is(&self, name: &str) -> bool {
        self.value(name)
    }
}

impl<V> Default for Overridable<V> {
    fn default() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }
}

impl<V: OverridableValue> From<V> for Overridable<V> {
    fn from(value: V) -> Self {
        Self::from_value(value)
    }
}

impl<V: OverridableValue> Serialize for Overridable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.rules.is_empty() {
            return V::zero().serialize(serializer);
        }
        if let Some(value) = self.rules.scalar_value() {
            return value.serialize(serializer);
        }
        RuleList(&self.rules).serialize(serializer)
    }
}

impl<'de, V: OverridableValue> Deserialize<'de> for Overridable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}

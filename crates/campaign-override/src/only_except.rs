//! Allow-list / deny-list booleans
//!
//! An older shape for per-repository booleans, kept so existing documents
//! still load:
//!
//! ```json
//! true
//! {"only": ["github.com/sourcegraph/*"]}
//! {"except": ["github.com/sourcegraph/old-*"]}
//! ```
//!
//! This is a separate precedence model from the last-match-wins rule list:
//! `only` means "true for matching names, false for everything else",
//! `except` means "false for matching names, true for everything else".
//! The two lists are never combined.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::aggregate::Errors;
use crate::codec::{self, Attempt, AttemptFn};
use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::value::describe;

const KIND: &str = "only/except";

/// A boolean expressed as a plain value, an allow-list, or a deny-list.
///
/// Pattern lists are never empty: the only way to build one is through the
/// checked constructors or the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlyExcept {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    /// The same value for every repository.
    Value(bool),
    /// True only for repositories matching one of the patterns.
    Only(Vec<Pattern>),
    /// True for every repository except those matching one of the patterns.
    Except(Vec<Pattern>),
}

impl OnlyExcept {
    /// Build from the three mutually exclusive fields.
    ///
    /// Exactly one of `value`, `only` or `except` must be set (an empty list
    /// counts as unset). This is checked before any pattern is compiled.
    pub fn new(value: Option<bool>, only: Vec<String>, except: Vec<String>) -> Result<Self> {
        let mut set = Vec::new();
        if value.is_some() {
            set.push("value");
        }
        if !only.is_empty() {
            set.push("only");
        }
        if !except.is_empty() {
            set.push("except");
        }
        if set.len() != 1 {
            return Err(Error::MutuallyExclusive { set });
        }

        let repr = match value {
            Some(value) => Repr::Value(value),
            None if !only.is_empty() => Repr::Only(compile_all(only)?),
            None => Repr::Except(compile_all(except)?),
        };
        Ok(Self { repr })
    }

    pub fn only<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::new(None, patterns.into_iter().map(Into::into).collect(), Vec::new())
    }

    pub fn except<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::new(None, Vec::new(), patterns.into_iter().map(Into::into).collect())
    }

    /// Whether the value is true for the named repository.
    pub fn is(&self, name: &str) -> bool {
        match &self.repr {
            Repr::Value(value) => *value,
            Repr::Only(patterns) => patterns.iter().any(|p| p.is_match(name)),
            Repr::Except(patterns) => !patterns.iter().any(|p| p.is_match(name)),
        }
    }

    /// The plain value, if this is not a pattern list.
    pub fn as_bool(&self) -> Option<bool> {
        match self.repr {
            Repr::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn only_patterns(&self) -> Option<&[Pattern]> {
        match &self.repr {
            Repr::Only(patterns) => Some(patterns),
            _ => None,
        }
    }

    pub fn except_patterns(&self) -> Option<&[Pattern]> {
        match &self.repr {
            Repr::Except(patterns) => Some(patterns),
            _ => None,
        }
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
        match raw.as_bool() {
            Some(value) => Attempt::Decoded(Self::from(value)),
            None => Attempt::Declined(Error::shape(
                KIND,
                format!("expected a boolean, found {}", describe(raw)),
            )),
        }
    }

    fn object_attempt(raw: &Value) -> Attempt<Self> {
        if !raw.is_object() {
            return Attempt::Declined(Error::shape(
                KIND,
                format!(
                    "expected a boolean or a mapping with only or except, found {}",
                    describe(raw)
                ),
            ));
        }

        let fields = match RawFields::deserialize(raw) {
            Ok(fields) => fields,
            Err(err) => return Attempt::Failed(Error::shape(KIND, err.to_string())),
        };

        Attempt::from_result(Self::new(
            None,
            fields.only.unwrap_or_default(),
            fields.except.unwrap_or_default(),
        ))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFields {
    #[serde(default)]
    only: Option<Vec<String>>,
    #[serde(default)]
    except: Option<Vec<String>>,
}

fn compile_all(patterns: Vec<String>) -> Result<Vec<Pattern>> {
    let mut compiled = Vec::with_capacity(patterns.len());
    let mut errors = Errors::new();

    for (index, pattern) in patterns.into_iter().enumerate() {
        match Pattern::compile(pattern) {
            Ok(p) => compiled.push(p),
            Err(source) => errors.push(Error::Rule {
                index,
                source: Box::new(source),
            }),
        }
    }

    errors.into_result()?;
    Ok(compiled)
}

impl From<bool> for OnlyExcept {
    fn from(value: bool) -> Self {
        Self {
            repr: Repr::Value(value),
        }
    }
}

impl Default for OnlyExcept {
    fn default() -> Self {
        Self::from(false)
    }
}

impl Serialize for OnlyExcept {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let (field, patterns) = match &self.repr {
            Repr::Value(value) => return serializer.serialize_bool(*value),
            Repr::Only(patterns) => ("only", patterns),
            Repr::Except(patterns) => ("except", patterns),
        };

        let texts: Vec<&str> = patterns.iter().map(Pattern::as_str).collect();
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(field, &texts)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for OnlyExcept {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}

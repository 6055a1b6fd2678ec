//! Environments and their resolution against the outer environment

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::variable::{self, Variable};

/// The environment of a single campaign step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    vars: Vec<Variable>,
}

impl Environment {
    pub fn new(vars: Vec<Variable>) -> Self {
        Self { vars }
    }

    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Names of the variables that are copied from the outer environment.
    pub fn outer_vars(&self) -> Vec<&str> {
        self.vars
            .iter()
            .filter(|v| v.value().is_none())
            .map(Variable::name)
            .collect()
    }

    /// Whether the environment resolves the same regardless of the outer one.
    pub fn is_static(&self) -> bool {
        self.vars.iter().all(|v| v.value().is_some())
    }

    /// Resolve every declared variable.
    ///
    /// `outer` holds `KEY=VALUE` entries, typically the executor's own process
    /// environment. Variables missing from it resolve to an empty string. A
    /// single malformed entry fails the whole resolution.
    pub fn resolve<I, S>(&self, outer: I) -> Result<BTreeMap<String, String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outer_map = HashMap::new();
        for entry in outer {
            let entry = entry.as_ref();
            let (key, value) = entry.split_once('=').ok_or_else(|| Error::MalformedOuter {
                entry: entry.to_string(),
            })?;
            outer_map.insert(key.to_string(), value.to_string());
        }

        let resolved: BTreeMap<String, String> = self
            .vars
            .iter()
            .map(|var| {
                let value = match var.value() {
                    Some(value) => value.to_string(),
                    None => outer_map.get(var.name()).cloned().unwrap_or_default(),
                };
                (var.name().to_string(), value)
            })
            .collect();

        tracing::debug!(
            declared = self.vars.len(),
            looked_up = self.outer_vars().len(),
            "Resolved step environment"
        );
        Ok(resolved)
    }

    /// Decode from either the array form or the object form.
    pub fn decode(raw: &Value) -> Result<Self> {
        match raw {
            Value::Array(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| Variable::decode(index, entry))
                .collect::<Result<Vec<_>>>()
                .map(Self::new),
            Value::Object(map) => map
                .iter()
                .map(|(name, value)| -> Result<Variable> {
                    Ok(Variable::literal(name.clone(), variable::scalar(name, value)?))
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::new),
            Value::Null => Ok(Self::default()),
            _ => Err(Error::shape("expected a list of variables or a mapping")),
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(input)?;
        Self::decode(&raw)
    }

    pub fn from_yaml(input: &str) -> Result<Self> {
        let raw: Value = serde_yaml::from_str(input)?;
        Self::decode(&raw)
    }
}

impl FromIterator<Variable> for Environment {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// Always written in the array form, which can express everything the object
// form can.
impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.vars)
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}

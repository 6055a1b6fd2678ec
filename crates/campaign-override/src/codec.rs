//! Shared decode/encode machinery for the wire shapes
//!
//! Decoding a raw value runs an ordered list of attempts. Each attempt either
//! recognises the value's shape and decodes it (successfully or not), or
//! declines so the next attempt can try. Attempts are pure: nothing is built
//! until one of them claims the value.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::rule::{Rule, RuleSet};
use crate::value::{OverridableValue, describe};

/// Outcome of a single decode attempt.
pub(crate) enum Attempt<T> {
    /// The value had this attempt's shape and decoded cleanly.
    Decoded(T),
    /// The value does not have this attempt's shape.
    Declined(Error),
    /// The value has this attempt's shape but is invalid.
    Failed(Error),
}

impl<T> Attempt<T> {
    pub(crate) fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Attempt::Decoded(value),
            Err(err) => Attempt::Failed(err),
        }
    }
}

pub(crate) type AttemptFn<T> = fn(&Value) -> Attempt<T>;

/// Run attempts in order; the first one that claims the value wins.
///
/// If every attempt declines, the last attempt's structural error is returned.
pub(crate) fn decode_with<T>(kind: &'static str, raw: &Value, attempts: &[AttemptFn<T>]) -> Result<T> {
    let mut declined = None;
    for attempt in attempts {
        match attempt(raw) {
            Attempt::Decoded(value) => return Ok(value),
            Attempt::Failed(err) => return Err(err),
            Attempt::Declined(err) => {
                tracing::debug!(kind, reason = %err, "Decode attempt declined");
                declined = Some(err);
            }
        }
    }

    Err(declined.unwrap_or_else(|| Error::shape(kind, format!("unexpected {}", describe(raw)))))
}

/// Decode an ordered list of single-key `{pattern: value}` mappings.
///
/// Shape problems (an entry that is not a mapping, has the wrong number of
/// keys, or a value of the wrong type) abort immediately. Pattern compile
/// failures are collected across every entry and reported together.
pub(crate) fn decode_rules<V: OverridableValue>(raw: &Value) -> Result<RuleSet<V>> {
    let entries = raw.as_array().ok_or_else(|| {
        Error::shape(
            V::KIND,
            format!("expected a list of single-key mappings, found {}", describe(raw)),
        )
    })?;

    let mut pairs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let map = entry.as_object().ok_or_else(|| {
            Error::shape(
                V::KIND,
                format!("array entry {} must be a mapping, found {}", index, describe(entry)),
            )
        })?;

        let (pattern, raw_value) = match (map.len(), map.iter().next()) {
            (1, Some(pair)) => pair,
            (count, _) => return Err(Error::EntryArity { index, count }),
        };

        let value = V::from_scalar(raw_value).ok_or_else(|| {
            Error::shape(
                V::KIND,
                format!(
                    "array entry {} ({:?}) must be a {}, found {}",
                    index,
                    pattern,
                    V::KIND,
                    describe(raw_value)
                ),
            )
        })?;

        pairs.push((pattern.clone(), value));
    }

    RuleSet::compile(pairs)
}

/// Serializes a rule set as `[{pattern: value}, ...]`.
pub(crate) struct RuleList<'a, V>(pub(crate) &'a RuleSet<V>);

impl<V: Serialize> Serialize for RuleList<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(RuleEntry))
    }
}

struct RuleEntry<'a, V>(&'a Rule<V>);

impl<V: Serialize> Serialize for RuleEntry<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.pattern().as_str(), self.0.value())?;
        map.end()
    }
}

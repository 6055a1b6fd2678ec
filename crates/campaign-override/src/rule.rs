//! Rules and ordered rule sets
//!
//! A [`RuleSet`] is resolved last-match-wins: rules are scanned from the last
//! declared to the first, and the first one whose pattern matches decides the
//! value. Declaration order, not pattern specificity, is what matters.

use crate::aggregate::Errors;
use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// A compiled pattern paired with the value it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<V> {
    pattern: Pattern,
    value: V,
}

impl<V> Rule<V> {
    /// Build a rule, compiling its pattern.
    pub fn new(pattern: impl Into<String>, value: V) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::compile(pattern)?,
            value,
        })
    }

    /// A rule matching every name.
    pub fn all(value: V) -> Self {
        Self {
            pattern: Pattern::all(),
            value,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

/// An ordered list of rules for a single overridable value.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet<V> {
    rules: Vec<Rule<V>>,
}

impl<V> RuleSet<V> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// A rule set equivalent to a plain scalar.
    pub fn scalar(value: V) -> Self {
        Self {
            rules: vec![Rule::all(value)],
        }
    }

    /// Compile `(pattern, value)` pairs in order.
    ///
    /// Every pattern is compiled even after a failure, so the returned error
    /// lists all invalid patterns.
    pub fn compile<I, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
    {
        let mut rules = Vec::new();
        let mut errors = Errors::new();

        for (index, (pattern, value)) in entries.into_iter().enumerate() {
            match Rule::new(pattern, value) {
                Ok(rule) => rules.push(rule),
                Err(source) => errors.push(Error::Rule {
                    index,
                    source: Box::new(source),
                }),
            }
        }

        errors.into_result()?;
        tracing::debug!(rules = rules.len(), "Compiled rule set");
        Ok(Self { rules })
    }

    /// The value of the last declared rule matching `name`.
    pub fn resolve(&self, name: &str) -> Option<&V> {
        let found = self.rules.iter().rev().find(|rule| rule.matches(name));
        tracing::trace!(name, matched = ?found.map(|r| r.pattern.as_str()), "Resolved rule");
        found.map(|rule| &rule.value)
    }

    /// The value if this rule set is a single all-matching rule.
    pub fn scalar_value(&self) -> Option<&V> {
        match self.rules.as_slice() {
            [rule] if rule.pattern.is_all() => Some(&rule.value),
            _ => None,
        }
    }

    /// Whether this rule set collapses to the plain scalar form.
    pub fn is_scalar(&self) -> bool {
        self.rules.is_empty() || self.scalar_value().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule<V>> {
        self.rules.iter()
    }
}

impl<V> Default for RuleSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a RuleSet<V> {
    type Item = &'a Rule<V>;
    type IntoIter = std::slice::Iter<'a, Rule<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

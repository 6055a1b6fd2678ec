//! Error types for campaign-override

use crate::aggregate::Errors;

/// Result type for campaign-override operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or decoding overridable values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A repository pattern is not a valid glob
    #[error("compiling repo pattern {pattern:?}: {source}")]
    PatternCompile {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The raw value matches none of the accepted shapes
    #[error("invalid {kind} value: {message}")]
    Shape { kind: &'static str, message: String },

    /// A rule list entry does not have exactly one key
    #[error("unexpected number of elements in the array at entry {index}: {count} (must be 1)")]
    EntryArity { index: usize, count: usize },

    /// Context for a failure in a single rule list entry
    #[error("building rule for array entry {index}: {source}")]
    Rule {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Zero, or more than one, of the mutually exclusive fields were set
    #[error("{}", exclusive_message(.set))]
    MutuallyExclusive { set: Vec<&'static str> },

    /// Independent problems collected from sibling entries
    #[error(transparent)]
    Invalid(#[from] Errors<Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn shape(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Shape {
            kind,
            message: message.into(),
        }
    }

    /// Every pattern that failed to compile, in document order.
    pub fn invalid_patterns(&self) -> Vec<&str> {
        match self {
            Error::PatternCompile { pattern, .. } => vec![pattern.as_str()],
            Error::Rule { source, .. } => source.invalid_patterns(),
            Error::Invalid(errors) => errors.iter().flat_map(|e| e.invalid_patterns()).collect(),
            _ => Vec::new(),
        }
    }
}

fn exclusive_message(set: &[&'static str]) -> String {
    if set.is_empty() {
        "exactly one of value, only, or except must be set".to_string()
    } else {
        format!(
            "only one of value, only, or except may be set; found {}",
            set.join(", ")
        )
    }
}

//! Error types for campaign-env

/// Result type for campaign-env operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or resolving an environment
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An outer environment entry is not in `KEY=VALUE` form
    #[error("unable to parse environment variable {entry:?}")]
    MalformedOuter { entry: String },

    /// A variable definition object does not have exactly one key
    #[error("only one key is allowed in variable definition at entry {index}: found {count}")]
    VariableArity { index: usize, count: usize },

    /// The raw value is neither the array form nor the object form
    #[error("invalid environment: {message}")]
    Shape { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }
}

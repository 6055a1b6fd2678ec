//! Error types for campaign-schema

use campaign_override::Errors;

/// Result type for campaign-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse JSON schema: {0}")]
    SchemaParse(#[source] serde_json::Error),

    #[error("failed to compile JSON schema: {message}")]
    SchemaCompile { message: String },

    #[error("failed to normalize input: {message}")]
    Normalize { message: String },

    /// The document violates the schema or does not fit the target type
    #[error(transparent)]
    Invalid(#[from] Errors<Violation>),
}

/// A single problem found in a document.
#[derive(Debug, thiserror::Error)]
pub enum Violation {
    /// A schema violation, formatted for display to users
    #[error("{0}")]
    Schema(String),

    /// The document passed (or failed) the schema but could not be unmarshalled
    #[error(transparent)]
    Unmarshal(#[from] serde_json::Error),
}

impl Error {
    /// The messages of every collected violation, in order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Invalid(violations) => violations.iter().map(|v| v.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

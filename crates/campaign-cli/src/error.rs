//! Error types for campaign-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Document failed schema validation or decoding
    #[error("invalid campaign spec: {0}")]
    Schema(#[from] campaign_schema::Error),

    /// Step environment could not be resolved
    #[error(transparent)]
    Env(#[from] campaign_env::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML at {path}: {message}")]
    Toml { path: PathBuf, message: String },

    #[error("Unsupported campaign spec format: {extension:?} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat { extension: String },

    #[error("Failed to write output: {0}")]
    Output(String),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

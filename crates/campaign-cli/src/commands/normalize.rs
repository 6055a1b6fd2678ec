//! Normalize command implementation

use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use crate::loader;

/// Print the decoded spec at `path` re-encoded in `format`.
///
/// Overridable fields come out in their most compact form, so a rule list
/// holding a single `*` entry is printed as a plain scalar.
pub fn run_normalize(path: &Path, format: OutputFormat) -> Result<()> {
    let spec = loader::load(path)?;
    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&spec).map_err(|e| CliError::Output(e.to_string()))?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&spec).map_err(|e| CliError::Output(e.to_string()))?
        }
    };
    println!("{}", output.trim_end());
    Ok(())
}

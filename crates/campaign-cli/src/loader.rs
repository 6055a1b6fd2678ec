//! Loading campaign spec files
//!
//! The document format is chosen from the file extension. YAML and JSON are
//! normalized by the schema crate; TOML is parsed here and then handed to the
//! same validator so all formats report errors the same way.

use std::path::Path;

use campaign_schema::{Schema, unmarshal_validate};

use crate::campaign::{CampaignSpec, SCHEMA};
use crate::error::{CliError, Result};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(CliError::UnsupportedFormat { extension }),
        }
    }
}

/// Read, validate and decode the campaign spec at `path`.
pub fn load(path: &Path) -> Result<CampaignSpec> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    tracing::debug!(path = %path.display(), ?format, "Loading campaign spec");
    parse(path, format, &content)
}

fn parse(path: &Path, format: Format, content: &str) -> Result<CampaignSpec> {
    match format {
        Format::Yaml | Format::Json => Ok(unmarshal_validate(SCHEMA, content)?),
        Format::Toml => {
            let value: serde_json::Value =
                toml::from_str(content).map_err(|e| CliError::Toml {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            Ok(Schema::compile(SCHEMA)?.unmarshal(value)?)
        }
    }
}

//! Check command implementation

use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::loader;

/// Validate the campaign spec at `path`.
pub fn run_check(path: &Path) -> Result<()> {
    let spec = loader::load(path)?;
    tracing::debug!(name = %spec.name, steps = spec.steps.len(), "Campaign spec is valid");
    println!("{}", "ok".green());
    Ok(())
}

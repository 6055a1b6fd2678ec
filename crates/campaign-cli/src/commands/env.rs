//! Env command implementation

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::loader;

#[derive(Debug, Serialize)]
struct StepEnv {
    step: usize,
    container: String,
    env: BTreeMap<String, String>,
}

/// Resolve every step environment of the spec at `path` against `outer`,
/// given as `NAME=value` entries.
pub fn run_env(path: &Path, outer: &[String], json: bool) -> Result<()> {
    let spec = loader::load(path)?;

    let steps = spec
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| -> Result<StepEnv> {
            Ok(StepEnv {
                step: i + 1,
                container: step.container.clone(),
                env: step.env.resolve(outer)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        let output =
            serde_json::to_string_pretty(&steps).map_err(|e| CliError::Output(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    for step in &steps {
        println!(
            "{} {} {}",
            "step".bold(),
            step.step.to_string().bold(),
            format!("({})", step.container).dimmed()
        );
        if step.env.is_empty() {
            println!("  {}", "(empty environment)".dimmed());
        }
        for (name, value) in &step.env {
            println!("  {}={}", name.cyan(), value);
        }
    }
    Ok(())
}

//! Resolve command implementation
//!
//! Shows the changeset template values that apply to each requested
//! repository.

use std::path::Path;

use colored::Colorize;

use crate::campaign::ResolvedTemplate;
use crate::error::{CliError, Result};
use crate::loader;

/// Resolve the changeset template of the spec at `path` for every repo.
pub fn run_resolve(path: &Path, repos: &[String], json: bool) -> Result<()> {
    let spec = loader::load(path)?;
    let template = spec
        .changeset_template
        .ok_or_else(|| CliError::user(format!("{} has no changesetTemplate", spec.name)))?;

    let resolved: Vec<ResolvedTemplate> = repos.iter().map(|repo| template.resolve(repo)).collect();

    if json {
        let output =
            serde_json::to_string_pretty(&resolved).map_err(|e| CliError::Output(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    for (i, entry) in resolved.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_resolved(entry);
    }
    Ok(())
}

fn print_resolved(entry: &ResolvedTemplate) {
    println!("{}", entry.repo.bold());
    println!("  {}     {}", "title:".dimmed(), entry.title);
    if !entry.body.is_empty() {
        println!("  {}      {}", "body:".dimmed(), entry.body);
    }
    println!("  {}    {}", "branch:".dimmed(), entry.branch.cyan());
    println!("  {} {}", "published:".dimmed(), entry.published.to_string().green());
    println!("  {}     {}", "draft:".dimmed(), entry.draft);
}

//! Campaign CLI
//!
//! Validates campaign spec documents and shows the values they resolve to
//! for individual repositories.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `warn`, or `debug` with `--verbose`)

mod campaign;
mod cli;
mod commands;
mod error;
mod loader;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays machine-readable.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose)
        .init();

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Check { file } => commands::run_check(&file),
        Commands::Resolve { file, repos, json } => commands::run_resolve(&file, &repos, json),
        Commands::Env { file, json } => {
            let outer: Vec<String> = std::env::vars_os()
                .map(|(key, value)| {
                    format!("{}={}", key.to_string_lossy(), value.to_string_lossy())
                })
                .collect();
            commands::run_env(&file, &outer, json)
        }
        Commands::Normalize { file, format } => commands::run_normalize(&file, format),
    }
}

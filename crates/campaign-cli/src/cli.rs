//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Campaign - validate campaign specs and resolve per-repository values
#[derive(Parser, Debug)]
#[command(name = "campaign")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate a campaign spec
    ///
    /// Checks the document against the campaign spec schema and compiles
    /// every repository pattern it contains.
    Check {
        /// Campaign spec file (.yaml, .yml, .json or .toml)
        file: PathBuf,
    },

    /// Show the changeset template values for one or more repositories
    ///
    /// Examples:
    ///   campaign resolve spec.yaml -r github.com/sourcegraph/src-cli
    ///   campaign resolve spec.yaml -r github.com/a/b -r github.com/c/d --json
    Resolve {
        /// Campaign spec file
        file: PathBuf,

        /// Repository name to resolve for (repeatable)
        #[arg(short, long = "repo", required = true)]
        repos: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve every step environment against the current process environment
    Env {
        /// Campaign spec file
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the decoded campaign spec in canonical form
    Normalize {
        /// Campaign spec file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// Output format for `normalize`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

//! Command-line interface for kubegen.
//!
//! # Commands
//!
//! - `add controller` - scaffold a controller for a Kubernetes API type
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors
//! - `--project-dir` - Project root (defaults to the current directory)
//!
//! `RUST_LOG` overrides the log level chosen by `--verbose`/`--quiet`.

mod add;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive (e.g. `"debug"`), overridden by `RUST_LOG`.
    pub log_level: String,
}

impl CliConfig {
    /// Install the global tracing subscriber. Later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "kubegen",
    about = "Scaffold Kubernetes operator controllers",
    version,
    long_about = "kubegen generates controller source files for Kubernetes operator projects, \
                  resolving a deterministic import table for each generated file."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Project root containing go.mod or kubegen.toml
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Add scaffolded files to the project
    Add(add::AddCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();

        match self.command {
            Commands::Add(cmd) => cmd.execute(&self.project_dir).await,
        }
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
        }
    }
}

//! Add scaffolded files to an operator project.
//!
//! ```bash
//! # Controller for the project's own API type
//! kubegen add controller --api-version app.example.com/v1alpha1 --kind AppService
//!
//! # Controller reconciling a built-in API
//! kubegen add controller --api-version rbac.authorization.k8s.io/v1 --kind Role \
//!     --custom-api-import k8s.io/api/rbac/v1
//!
//! # Several kinds of one API version at once
//! kubegen add controller --api-version app.example.com/v1alpha1 --kind AppService --kind AppBackup
//!
//! # Print instead of writing
//! kubegen add controller --api-version app.example.com/v1alpha1 --kind AppService --dry-run
//! ```

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ProjectConfig;
use crate::core::ResourceDescriptor;
use crate::scaffold::{ControllerKind, Scaffold, ScaffoldOutcome, ScaffoldStatus, generate_batch};
use crate::utils::LocalFileSystem;

/// Command to add scaffolded files to the project.
#[derive(Args)]
pub struct AddCommand {
    #[command(subcommand)]
    command: AddSubcommand,
}

#[derive(Subcommand)]
enum AddSubcommand {
    /// Add a controller for a Kubernetes API type
    Controller(ControllerArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ControllerArgs {
    /// API version of the reconciled type, e.g. app.example.com/v1alpha1
    #[arg(long)]
    api_version: String,

    /// Kind of the reconciled type, e.g. AppService (repeatable)
    #[arg(long, required = true)]
    kind: Vec<String>,

    /// Import of an external API package, as `path` or `path=identifier`
    #[arg(long)]
    custom_api_import: Option<String>,

    /// Output file, relative to the project directory (single kind only)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Print the generated source instead of writing it
    #[arg(long)]
    dry_run: bool,
}

impl AddCommand {
    pub async fn execute(self, project_dir: &Path) -> Result<()> {
        match self.command {
            AddSubcommand::Controller(args) => args.execute(project_dir).await,
        }
    }
}

impl ControllerArgs {
    fn requests(&self) -> Result<Vec<ControllerKind>> {
        if self.path.is_some() && self.kind.len() > 1 {
            bail!("--path can only be used with a single --kind");
        }

        self.kind
            .iter()
            .map(|kind| -> Result<ControllerKind> {
                let resource = ResourceDescriptor::new(&self.api_version, kind)?;
                let mut request = ControllerKind::new(resource);
                if let Some(custom_import) = &self.custom_api_import {
                    request = request.with_custom_import(custom_import.clone());
                }
                if let Some(path) = &self.path {
                    request = request.with_path(path.clone());
                }
                Ok(request)
            })
            .collect()
    }

    async fn execute(self, project_dir: &Path) -> Result<()> {
        let config = ProjectConfig::load(project_dir)
            .with_context(|| format!("Failed to load project in {}", project_dir.display()))?;
        let requests = self.requests()?;
        let scaffold = Scaffold::new(config, Arc::new(LocalFileSystem));

        if self.dry_run {
            for request in &requests {
                let rendered = scaffold.render(request)?;
                println!("{}", format!("// {}", rendered.path.display()).dimmed());
                print!("{}", rendered.content);
            }
            return Ok(());
        }

        let mut failures = 0;
        for result in generate_batch(&scaffold, requests).await {
            match result {
                Ok(outcome) => report(&outcome),
                Err(e) if self.kind.len() == 1 => return Err(e),
                Err(e) => {
                    failures += 1;
                    eprintln!("{}: {:#}", "error".red().bold(), e);
                }
            }
        }

        if failures > 0 {
            bail!("{failures} of {} controllers failed", self.kind.len());
        }
        Ok(())
    }
}

fn report(outcome: &ScaffoldOutcome) {
    let label = match outcome.status {
        ScaffoldStatus::Created => "Created".green(),
        ScaffoldStatus::Overwritten => "Overwrote".yellow(),
        ScaffoldStatus::Skipped => "Skipped".dimmed(),
    };
    println!("{} {}", label, outcome.path.display());
}

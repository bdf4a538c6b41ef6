//! Project configuration.
//!
//! A scaffold request needs one piece of project state: the Go module path
//! (`repo`) the project's own API packages live under. It is discovered from
//! the project directory:
//!
//! 1. `kubegen.toml` with `repo = "github.com/example-inc/app-operator"`
//! 2. otherwise the `module` directive of `go.mod`
//!
//! ```rust,no_run
//! use kubegen_cli::config::ProjectConfig;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ProjectConfig::load(Path::new("."))?;
//! println!("generating into module {}", config.repo);
//! # Ok(())
//! # }
//! ```

mod parser;

pub use parser::parse_config;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_NAME, GO_MOD_FILE_NAME};
use crate::core::KubegenError;

/// Settings shared by every scaffold request in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Go module path of the project, e.g. `github.com/example-inc/app-operator`
    pub repo: String,

    /// Root that relative output paths resolve against
    #[serde(skip, default = "default_project_dir")]
    pub project_dir: PathBuf,
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ProjectConfig {
    /// Configuration for `repo` rooted at the current directory.
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            project_dir: default_project_dir(),
        }
    }

    #[must_use]
    pub fn with_project_dir(mut self, project_dir: impl Into<PathBuf>) -> Self {
        self.project_dir = project_dir.into();
        self
    }

    /// Discover the configuration for the project at `project_dir`.
    ///
    /// # Errors
    ///
    /// Fails with [`KubegenError::ConfigError`] when neither `kubegen.toml`
    /// nor a `go.mod` with a `module` directive is present, or when either
    /// file cannot be read or parsed.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            tracing::debug!("Loading project config from {}", config_path.display());
            let config: Self = parse_config(&config_path)?;
            if config.repo.trim().is_empty() {
                return Err(KubegenError::ConfigError {
                    message: format!("'repo' is empty in {}", config_path.display()),
                }
                .into());
            }
            return Ok(config.with_project_dir(project_dir));
        }

        let go_mod = project_dir.join(GO_MOD_FILE_NAME);
        if go_mod.is_file() {
            tracing::debug!("Reading module path from {}", go_mod.display());
            let content = std::fs::read_to_string(&go_mod)
                .with_context(|| format!("Failed to read {}", go_mod.display()))?;
            let repo = module_path(&content).ok_or_else(|| KubegenError::ConfigError {
                message: format!("no module directive in {}", go_mod.display()),
            })?;
            return Ok(Self::new(repo).with_project_dir(project_dir));
        }

        Err(KubegenError::ConfigError {
            message: format!(
                "neither {CONFIG_FILE_NAME} nor {GO_MOD_FILE_NAME} found in {}",
                project_dir.display()
            ),
        }
        .into())
    }
}

/// Module path declared by a `go.mod` file.
fn module_path(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches('"');
        (!path.is_empty()).then(|| path.to_string())
    })
}

//! Scaffold execution.
//!
//! A scaffold request runs synchronously in four steps:
//!
//! 1. **Assemble** - a [`ScaffoldFile`] produces its [`ScaffoldInput`]: output
//!    path, overwrite policy, template and a request-local render context
//! 2. **Check** - the destination is probed through the [`FileSystem`]
//!    collaborator and the [`IfExistsAction`] applied
//! 3. **Render** - the template is rendered with [`TemplateRenderer`]
//! 4. **Write** - the result goes to disk through the collaborator
//!
//! Nothing is rendered or written unless every earlier step succeeded.
//! Requests share no mutable state, so [`generate_batch`] can run many of
//! them at once.
//!
//! ```rust,no_run
//! use kubegen_cli::config::ProjectConfig;
//! use kubegen_cli::core::ResourceDescriptor;
//! use kubegen_cli::scaffold::{ControllerKind, Scaffold};
//! use kubegen_cli::utils::LocalFileSystem;
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ProjectConfig::new("github.com/example-inc/app-operator");
//! let scaffold = Scaffold::new(config, Arc::new(LocalFileSystem));
//! let resource = ResourceDescriptor::new("app.example.com/v1alpha1", "AppService")?;
//! let outcome = scaffold.execute(&ControllerKind::new(resource))?;
//! println!("{}", outcome.path.display());
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod template;

pub use controller::ControllerKind;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ProjectConfig;
use crate::core::{KubegenError, ResourceDescriptor};
use crate::imports::{ImportEntry, ImportIdentifier};
use crate::templating::{TemplateContext, TemplateRenderer};
use crate::utils::FileSystem;

/// What to do when the destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IfExistsAction {
    /// Fail with [`KubegenError::AlreadyExists`] before rendering.
    #[default]
    Error,
    /// Replace the existing file.
    Overwrite,
    /// Leave the existing file untouched and report it as skipped.
    Skip,
}

/// Values a scaffold template is rendered against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub resource: ResourceDescriptor,
    /// Identifier of the package holding the reconciled API type
    pub import_ident: ImportIdentifier,
    /// Import table sorted by path
    pub imports: Vec<ImportEntry>,
}

/// Everything needed to render and place one file.
#[derive(Debug, Clone)]
pub struct ScaffoldInput {
    /// Output path, relative to the project root unless absolute
    pub path: PathBuf,
    pub if_exists_action: IfExistsAction,
    pub template_body: &'static str,
    pub context: RenderContext,
}

/// A file kind the scaffolder knows how to generate.
pub trait ScaffoldFile: Send + Sync {
    /// Assemble the request. Pure: no file system access.
    fn input(&self, config: &ProjectConfig) -> Result<ScaffoldInput, KubegenError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStatus {
    Created,
    Overwritten,
    Skipped,
}

/// Result of a successful scaffold request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Absolute (project-root joined) path of the file
    pub path: PathBuf,
    pub status: ScaffoldStatus,
}

/// A rendered file that has not been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Output path as assembled, before joining with the project root
    pub path: PathBuf,
    pub content: String,
}

/// Runs scaffold requests against a project.
#[derive(Clone)]
pub struct Scaffold {
    config: ProjectConfig,
    fs: Arc<dyn FileSystem>,
    renderer: TemplateRenderer,
}

impl Scaffold {
    pub fn new(config: ProjectConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            fs,
            renderer: TemplateRenderer::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Assemble and render `file` without touching the file system.
    ///
    /// # Errors
    ///
    /// Assembly errors (e.g. custom import parsing) and template errors.
    pub fn render(&self, file: &dyn ScaffoldFile) -> Result<RenderedFile, KubegenError> {
        let input = file.input(&self.config)?;
        let content = self.render_input(&input)?;
        Ok(RenderedFile {
            path: input.path,
            content,
        })
    }

    /// Assemble, check, render and write `file`.
    ///
    /// # Errors
    ///
    /// - [`KubegenError::AlreadyExists`] if the destination is occupied and the
    ///   file's policy is [`IfExistsAction::Error`]; nothing is written. Except
    ///   under [`IfExistsAction::Overwrite`], the write itself refuses to
    ///   replace a file that appeared after the existence check
    /// - assembly and template errors
    /// - write failures from the [`FileSystem`]
    pub fn execute(&self, file: &dyn ScaffoldFile) -> Result<ScaffoldOutcome> {
        let input = file.input(&self.config)?;
        let abs_path = self.absolute_path(&input.path);

        let exists = self.fs.exists(&abs_path);
        let status = match (exists, input.if_exists_action) {
            (false, _) => ScaffoldStatus::Created,
            (true, IfExistsAction::Error) => {
                return Err(KubegenError::AlreadyExists {
                    path: input.path.display().to_string(),
                }
                .into());
            }
            (true, IfExistsAction::Skip) => {
                tracing::warn!("Skipping {}: file already exists", abs_path.display());
                return Ok(ScaffoldOutcome {
                    path: abs_path,
                    status: ScaffoldStatus::Skipped,
                });
            }
            (true, IfExistsAction::Overwrite) => ScaffoldStatus::Overwritten,
        };

        let content = self.render_input(&input)?;
        if input.if_exists_action == IfExistsAction::Overwrite {
            self.fs
                .write(&abs_path, &content)
                .with_context(|| format!("Failed to write scaffold file: {}", abs_path.display()))?;
        } else {
            // The destination may have been taken since the check above
            match self.fs.create(&abs_path, &content) {
                Ok(()) => {}
                Err(e) if is_already_exists(&e) => {
                    if input.if_exists_action == IfExistsAction::Skip {
                        tracing::warn!("Skipping {}: file already exists", abs_path.display());
                        return Ok(ScaffoldOutcome {
                            path: abs_path,
                            status: ScaffoldStatus::Skipped,
                        });
                    }
                    return Err(KubegenError::AlreadyExists {
                        path: input.path.display().to_string(),
                    }
                    .into());
                }
                Err(e) => {
                    return Err(e.context(format!(
                        "Failed to write scaffold file: {}",
                        abs_path.display()
                    )));
                }
            }
        }

        tracing::info!("Created {}", abs_path.display());
        Ok(ScaffoldOutcome {
            path: abs_path,
            status,
        })
    }

    fn absolute_path(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config.project_dir.join(path)
        }
    }

    fn render_input(&self, input: &ScaffoldInput) -> Result<String, KubegenError> {
        let context = TemplateContext::from_serialize(&input.context).map_err(|e| {
            KubegenError::TemplateError {
                message: TemplateRenderer::format_tera_error(&e),
            }
        })?;
        Ok(self.renderer.render_template(input.template_body, &context)?)
    }
}

fn is_already_exists(error: &anyhow::Error) -> bool {
    matches!(error.downcast_ref::<KubegenError>(), Some(KubegenError::AlreadyExists { .. }))
}

/// Run `files` concurrently, one blocking task each.
///
/// Every request resolves against its own copy of the base import table.
/// Results are returned in the order of `files`.
pub async fn generate_batch<F>(scaffold: &Scaffold, files: Vec<F>) -> Vec<Result<ScaffoldOutcome>>
where
    F: ScaffoldFile + 'static,
{
    let tasks: Vec<_> = files
        .into_iter()
        .map(|file| {
            let scaffold = scaffold.clone();
            tokio::task::spawn_blocking(move || scaffold.execute(&file))
        })
        .collect();

    futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.context("Scaffold task panicked").and_then(|result| result))
        .collect()
}

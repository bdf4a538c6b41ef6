//! Controller scaffold request assembly.
//!
//! [`ControllerKind`] turns a resource descriptor, an optional custom import
//! and an optional explicit output path into a [`ScaffoldInput`]: the output
//! path, the overwrite policy and a render context whose import table has
//! been resolved for this request alone.

use std::path::PathBuf;

use super::template::CONTROLLER_KIND_TEMPLATE;
use super::{IfExistsAction, RenderContext, ScaffoldFile, ScaffoldInput};
use crate::config::ProjectConfig;
use crate::constants::{CONTROLLER_DIR, SOURCE_FILE_EXTENSION};
use crate::core::{KubegenError, ResourceDescriptor};
use crate::imports::{CustomImportSpec, ImportIdentifier, ImportPath, ImportTable, resolver};

/// Input for a `pkg/controller/<kind>/<version>/<kind>_controller.go` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerKind {
    /// The controller's primary resource
    pub resource: ResourceDescriptor,
    /// Import for a built-in or external API the controller reconciles, as
    /// `path` or `path=identifier`
    pub custom_import: Option<String>,
    /// Output path; derived from the resource when unset
    pub path: Option<PathBuf>,
}

impl ControllerKind {
    pub fn new(resource: ResourceDescriptor) -> Self {
        Self {
            resource,
            custom_import: None,
            path: None,
        }
    }

    #[must_use]
    pub fn with_custom_import(mut self, custom_import: impl Into<String>) -> Self {
        self.custom_import = Some(custom_import.into());
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Where the controller goes when no explicit path is given.
    #[must_use]
    pub fn default_path(resource: &ResourceDescriptor) -> PathBuf {
        let file_name = format!("{}_controller.{}", resource.lower_kind, SOURCE_FILE_EXTENSION);
        PathBuf::from(CONTROLLER_DIR)
            .join(&resource.lower_kind)
            .join(&resource.version)
            .join(file_name)
    }

    /// Resolve this request's import table and the identifier of the package
    /// holding the reconciled API type.
    ///
    /// # Errors
    ///
    /// Propagates [`KubegenError::EmptyImportPath`] and
    /// [`KubegenError::EmptyImportIdentifier`] from custom import parsing.
    pub fn resolve_imports(
        &self,
        repo: &str,
    ) -> Result<(ImportTable, ImportIdentifier), KubegenError> {
        let table = ImportTable::base();

        let (path, ident) = match &self.custom_import {
            Some(raw) => {
                let spec = CustomImportSpec::parse(raw)?;
                (spec.path, spec.ident)
            }
            None => (
                ImportPath::new(self.resource.default_import_path(repo))?,
                ImportIdentifier::sanitize(&self.resource.default_import_identifier()),
            ),
        };

        let table = resolver::merge(table, path.clone(), ident);
        let ident = table.identifier_for(&path).cloned().unwrap_or_default();

        tracing::debug!(
            "Resolved {} imports for {} controller, API package {} as {:?}",
            table.len(),
            self.resource.kind,
            path,
            ident.as_str()
        );

        Ok((table, ident))
    }
}

impl ScaffoldFile for ControllerKind {
    fn input(&self, config: &ProjectConfig) -> Result<ScaffoldInput, KubegenError> {
        let path = self.path.clone().unwrap_or_else(|| Self::default_path(&self.resource));
        let (table, import_ident) = self.resolve_imports(&config.repo)?;

        Ok(ScaffoldInput {
            path,
            if_exists_action: IfExistsAction::Error,
            template_body: CONTROLLER_KIND_TEMPLATE,
            context: RenderContext {
                resource: self.resource.clone(),
                import_ident,
                imports: table.entries(),
            },
        })
    }
}

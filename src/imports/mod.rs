//! Import tables for generated Go sources
//!
//! Every generated file carries an [`ImportTable`] mapping package paths to
//! the short identifiers the generated code uses to reference them. Tables
//! start life as a copy of the well-known base set returned by
//! [`ImportTable::base`]; the base set itself is a constant and cannot be
//! reached mutably, so concurrent scaffold requests never observe each
//! other's custom imports.
//!
//! - [`parser`] turns a user supplied `path[=identifier]` string into a
//!   [`CustomImportSpec`]
//! - [`resolver`] merges a `(path, identifier)` pair into a request table,
//!   renaming the identifier once on collision
//!
//! ```rust
//! use kubegen_cli::imports::{ImportIdentifier, ImportPath, ImportTable, resolver};
//!
//! let table = ImportTable::base();
//! let path = ImportPath::new("k8s.io/api/rbac/v1").unwrap();
//! let table = resolver::merge(table, path.clone(), ImportIdentifier::sanitize("rbacv1"));
//! assert_eq!(table.identifier_for(&path).map(|id| id.as_str()), Some("rbacv1"));
//! ```

pub mod parser;
pub mod resolver;

pub use parser::CustomImportSpec;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::core::KubegenError;

/// Packages every controller scaffold imports, with their preferred
/// identifiers. An empty identifier means "no alias".
const BASE_IMPORTS: &[(&str, &str)] = &[
    ("k8s.io/api/core/v1", "corev1"),
    ("k8s.io/apimachinery/pkg/api/errors", ""),
    ("k8s.io/apimachinery/pkg/apis/meta/v1", "metav1"),
    ("k8s.io/apimachinery/pkg/runtime", ""),
    ("k8s.io/apimachinery/pkg/types", ""),
    ("sigs.k8s.io/controller-runtime/pkg/client", ""),
    ("sigs.k8s.io/controller-runtime/pkg/controller", ""),
    ("sigs.k8s.io/controller-runtime/pkg/controller/controllerutil", ""),
    ("sigs.k8s.io/controller-runtime/pkg/handler", ""),
    ("sigs.k8s.io/controller-runtime/pkg/manager", ""),
    ("sigs.k8s.io/controller-runtime/pkg/reconcile", ""),
    ("sigs.k8s.io/controller-runtime/pkg/log", "logf"),
    ("sigs.k8s.io/controller-runtime/pkg/source", ""),
];

/// A non-empty package location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ImportPath(String);

impl ImportPath {
    /// Wrap a package path, rejecting empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`KubegenError::EmptyImportPath`] if `path` is empty.
    pub fn new(path: impl Into<String>) -> Result<Self, KubegenError> {
        let path = path.into();
        if path.is_empty() {
            return Err(KubegenError::EmptyImportPath {
                input: path,
            });
        }
        Ok(Self(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A package identifier made of ASCII letters, ASCII digits and `_`.
///
/// Empty means the package is imported under its natural name with no alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ImportIdentifier(String);

impl ImportIdentifier {
    /// Keep only the characters legal in an identifier, in order.
    ///
    /// Anything else is dropped, never replaced. Case is preserved.
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        Self(raw.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect())
    }

    /// The identifier with `suffix` appended.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self::sanitize(&format!("{}{suffix}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ImportIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One import line as handed to the template engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportEntry {
    pub path: ImportPath,
    pub ident: ImportIdentifier,
}

/// Package path to identifier mapping for a single generated file.
///
/// Keys are unique. Iteration and [`ImportTable::entries`] are ordered by path
/// so repeated renders of the same table are byte-for-byte identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    entries: BTreeMap<ImportPath, ImportIdentifier>,
}

impl ImportTable {
    /// A fresh, independently owned copy of the well-known base imports.
    #[must_use]
    pub fn base() -> Self {
        let entries = BASE_IMPORTS
            .iter()
            .map(|(path, ident)| {
                (ImportPath((*path).to_string()), ImportIdentifier((*ident).to_string()))
            })
            .collect();
        Self {
            entries,
        }
    }

    /// Bind `path` to `ident`, replacing any previous binding for `path`.
    pub fn insert(&mut self, path: ImportPath, ident: ImportIdentifier) {
        self.entries.insert(path, ident);
    }

    #[must_use]
    pub fn identifier_for(&self, path: &ImportPath) -> Option<&ImportIdentifier> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn contains_path(&self, path: &ImportPath) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate `(path, identifier)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&ImportPath, &ImportIdentifier)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render-ready sequence of entries sorted lexicographically by path.
    #[must_use]
    pub fn entries(&self) -> Vec<ImportEntry> {
        self.entries
            .iter()
            .map(|(path, ident)| ImportEntry {
                path: path.clone(),
                ident: ident.clone(),
            })
            .collect()
    }
}

//! Parsing of user supplied custom imports.
//!
//! A custom import names the package holding the API types a controller
//! reconciles, optionally with the identifier to import it under:
//!
//! | Input | Path | Identifier |
//! |---|---|---|
//! | `k8s.io/api/rbac-2/v1` | `k8s.io/api/rbac-2/v1` | `rbac2v1` (derived) |
//! | `k8s.io/api/rbac/v1=rbac-v1` | `k8s.io/api/rbac/v1` | `rbacv1` |
//! | `k8s.io/api/rbac/v1=rbacv1=` | `k8s.io/api/rbac/v1` | `rbacv1` |
//! | `k8s.io/api/rbac/v1=` | error | |
//! | `=rbacv1` | error | |
//!
//! Only the first two `=`-separated parts are considered. Identifiers are
//! sanitized after parsing by dropping anything that is not an ASCII letter,
//! digit or underscore.

use super::{ImportIdentifier, ImportPath};
use crate::core::KubegenError;

/// A parsed custom import: where the package lives and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomImportSpec {
    pub path: ImportPath,
    pub ident: ImportIdentifier,
}

/// What the text after the separator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentifierPart<'a> {
    /// Derive the identifier from the path.
    Derive,
    /// A lone `=` with nothing after it.
    Missing,
    /// The caller spelled out an identifier.
    Explicit(&'a str),
}

impl<'a> IdentifierPart<'a> {
    fn classify(parts: &[&'a str]) -> Self {
        match parts {
            [_] => Self::Derive,
            [_, ident] if ident.trim().is_empty() => Self::Missing,
            [_, ident, ..] if !ident.trim().is_empty() => Self::Explicit(ident.trim()),
            // `path==...`: the trailing parts are ignored, so this reads like
            // a bare path
            _ => Self::Derive,
        }
    }
}

impl CustomImportSpec {
    /// Parse `path` or `path=identifier`.
    ///
    /// # Errors
    ///
    /// - [`KubegenError::EmptyImportPath`] if nothing but whitespace precedes the first `=`
    /// - [`KubegenError::EmptyImportIdentifier`] if a single `=` is followed by nothing
    pub fn parse(raw: &str) -> Result<Self, KubegenError> {
        let parts: Vec<&str> = raw.split('=').collect();
        let path = parts[0].trim();
        if path.is_empty() {
            return Err(KubegenError::EmptyImportPath {
                input: raw.to_string(),
            });
        }

        let ident = match IdentifierPart::classify(&parts) {
            IdentifierPart::Missing => {
                return Err(KubegenError::EmptyImportIdentifier {
                    input: raw.to_string(),
                });
            }
            IdentifierPart::Explicit(ident) => ImportIdentifier::sanitize(ident),
            IdentifierPart::Derive => ImportIdentifier::sanitize(&derive_identifier(path)),
        };

        tracing::debug!("Parsed custom import {:?} as {} => {:?}", raw, path, ident.as_str());

        Ok(Self {
            path: ImportPath::new(path)?,
            ident,
        })
    }
}

/// Last two `/` segments joined, lower-cased; the whole path if it has one segment.
fn derive_identifier(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let derived = match segments.as_slice() {
        [.., parent, last] => format!("{parent}{last}"),
        [only] => (*only).to_string(),
        [] => String::new(),
    };
    derived.to_lowercase()
}

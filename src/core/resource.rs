//! Resource descriptors for scaffolded controllers
//!
//! A [`ResourceDescriptor`] identifies the Kubernetes API type a controller
//! reconciles: its group, version and kind, plus the derived forms used for
//! file names, package paths and import identifiers.
//!
//! ```rust
//! use kubegen_cli::core::ResourceDescriptor;
//!
//! let resource = ResourceDescriptor::new("app.example.com/v1alpha1", "AppService").unwrap();
//! assert_eq!(resource.group, "app");
//! assert_eq!(resource.lower_kind, "appservice");
//! assert_eq!(resource.default_import_identifier(), "appv1alpha1");
//! ```

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::error::KubegenError;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v[1-9][0-9]*((alpha|beta)[1-9][0-9]*)?$").expect("version pattern is valid")
});
static KIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]+$").expect("kind pattern is valid"));

/// Identifies the target API type of a scaffold request.
///
/// Immutable once constructed. Serialized into the template context as
/// `resource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    /// `<full_group>/<version>`, e.g. `app.example.com/v1alpha1`
    pub api_version: String,
    /// UpperCamelCase kind, e.g. `AppService`
    pub kind: String,
    /// Fully qualified group, e.g. `app.example.com`
    pub full_group: String,
    /// First segment of the full group, e.g. `app`
    pub group: String,
    /// Group as it appears in Go package paths: lower-cased, `-` removed
    pub go_import_group: String,
    /// API version, e.g. `v1alpha1`
    pub version: String,
    /// Lower-cased kind
    pub lower_kind: String,
}

impl ResourceDescriptor {
    /// Build and validate a descriptor from an API version and kind.
    ///
    /// # Errors
    ///
    /// Returns [`KubegenError::InvalidResource`] when the API version is not of
    /// the form `<group>/<version>`, the version is not a Kubernetes version
    /// (`v1`, `v1alpha1`, `v2beta3`, ...), or the kind is not UpperCamelCase.
    pub fn new(api_version: &str, kind: &str) -> Result<Self, KubegenError> {
        let invalid = |reason: &str| KubegenError::InvalidResource {
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = api_version.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() {
            return Err(invalid("full group cannot be empty"));
        }
        let full_group = parts[0];
        let group = full_group.split('.').next().unwrap_or_default();
        if group.is_empty() {
            return Err(invalid("group cannot be empty"));
        }

        let version = parts[1];
        if version.is_empty() {
            return Err(invalid("version cannot be empty"));
        }
        if !VERSION_RE.is_match(version) {
            return Err(invalid(
                "version is not in the correct Kubernetes version format, ex. v1alpha1",
            ));
        }

        if kind.is_empty() {
            return Err(invalid("kind cannot be empty"));
        }
        if !KIND_RE.is_match(kind) {
            return Err(invalid("kind must start with an uppercase character"));
        }

        Ok(Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            full_group: full_group.to_string(),
            group: group.to_string(),
            go_import_group: group.to_lowercase().replace('-', ""),
            version: version.to_string(),
            lower_kind: kind.to_lowercase(),
        })
    }

    /// Identifier the resource's own API package gets when no custom import
    /// is given: group and version concatenated, lower-cased.
    #[must_use]
    pub fn default_import_identifier(&self) -> String {
        format!("{}{}", self.go_import_group, self.version).to_lowercase()
    }

    /// Package path of the resource's own API types under `repo`.
    #[must_use]
    pub fn default_import_path(&self, repo: &str) -> String {
        let repo = repo.trim_end_matches('/');
        format!("{repo}/pkg/apis/{}/{}", self.go_import_group, self.version)
    }
}

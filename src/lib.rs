//! kubegen - Kubernetes operator controller scaffolding
//!
//! kubegen generates controller source files for operator projects. Each
//! scaffold request renders one file from a fixed template against a
//! request-local import table, so identical inputs always produce identical
//! output and concurrent requests never see each other's imports.
//!
//! # Architecture Overview
//!
//! A request flows through:
//! - [`imports::parser`] - parse a `path[=identifier]` custom import
//! - [`imports::resolver`] - merge it into a copy of the base import table,
//!   renaming the identifier once on collision
//! - [`scaffold`] - assemble output path, overwrite policy and render context,
//!   then render with [`templating`] and write through [`utils::FileSystem`]
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Project configuration (`kubegen.toml` / `go.mod`)
//! - [`core`] - Error types and resource descriptors
//! - [`imports`] - Import paths, identifiers and tables
//! - [`scaffold`] - Request assembly and execution
//! - [`templating`] - Tera rendering
//! - [`utils`] - File system collaborator and atomic writes
//!
//! # Command-Line Usage
//!
//! ```bash
//! kubegen add controller --api-version app.example.com/v1alpha1 --kind AppService
//! kubegen add controller --api-version rbac.authorization.k8s.io/v1 --kind Role \
//!     --custom-api-import k8s.io/api/rbac/v1=rbacv1
//! ```

// Core functionality modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// Generation
pub mod imports;
pub mod scaffold;
pub mod templating;

// Supporting modules
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

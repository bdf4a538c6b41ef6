//! Global constants used throughout the kubegen codebase.
//!
//! File names and directory layout conventions of generated projects live
//! here so the scaffolders and the config loader agree on them.

/// Project configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "kubegen.toml";

/// Go module file used to discover the repository import path.
pub const GO_MOD_FILE_NAME: &str = "go.mod";

/// Root directory of generated controller packages.
pub const CONTROLLER_DIR: &str = "pkg/controller";

/// Extension of generated source files.
pub const SOURCE_FILE_EXTENSION: &str = "go";

//! Generic TOML parsing with file path context in error messages.
//!
//! ```rust,no_run
//! use kubegen_cli::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct MyConfig {
//!     repo: String,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: MyConfig = parse_config(Path::new("kubegen.toml"))?;
//! println!("repo: {}", config.repo);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// Fails if the file cannot be read or does not deserialize into `T`; the
/// error names the file.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .map_err(crate::core::KubegenError::from)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

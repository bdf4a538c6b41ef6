//! File system access for scaffolding.
//!
//! Generation itself never touches the disk. The two operations it needs,
//! an existence check before rendering and the final write, go through the
//! [`FileSystem`] trait so the executor can run against the real disk
//! ([`LocalFileSystem`]) or an in-memory double in tests.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::KubegenError;

/// The file system operations a scaffold request depends on.
pub trait FileSystem: Send + Sync {
    /// Whether anything occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Write `content` to `path`, creating parent directories as needed.
    /// Replaces an existing file.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Like [`FileSystem::write`], but fails with
    /// [`KubegenError::AlreadyExists`] if anything occupies `path` at the
    /// moment of writing.
    fn create(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as occupied
        fs::symlink_metadata(path).is_ok()
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        safe_write(path, content)
    }

    fn create(&self, path: &Path, content: &str) -> Result<()> {
        atomic_create(path, content.as_bytes())
    }
}

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Fails if the path exists but is not a directory, or creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        })?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Atomically write a string to a file. See [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// Content goes to a temporary file in the target directory, is synced, and
/// is then renamed over `path`, so readers never observe a partial file.
///
/// # Errors
///
/// Fails if the parent directory cannot be created or any write step fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp = staged_temp_file(path, content)?;

    temp.persist(path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Atomically create a new file, never replacing an existing one.
///
/// Same write-then-rename strategy as [`atomic_write`], but the final step
/// refuses to clobber whatever is at `path`, including a dangling symlink.
///
/// # Errors
///
/// [`KubegenError::AlreadyExists`] if `path` is occupied when the file is
/// moved into place; otherwise as [`atomic_write`].
pub fn atomic_create(path: &Path, content: &[u8]) -> Result<()> {
    let temp = staged_temp_file(path, content)?;

    if let Err(e) = temp.persist_noclobber(path) {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            return Err(KubegenError::AlreadyExists {
                path: path.display().to_string(),
            }
            .into());
        }
        return Err(anyhow::Error::from(e.error)
            .context(format!("Failed to rename temp file to: {}", path.display())));
    }

    Ok(())
}

/// Write and sync `content` to a temp file beside `path`.
fn staged_temp_file(path: &Path, content: &[u8]) -> Result<tempfile::NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temp file in: {}\n\nCheck file permissions and that directory exists",
            parent.display()
        )
    })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file for: {}", path.display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    Ok(temp)
}

//! Test utilities for kubegen
//!
//! Helpers shared by unit tests and the `tests/` suites (enable the
//! `test-utils` feature to use them from integration tests):
//!
//! - [`init_test_logging`] - one-time tracing subscriber setup
//! - [`MemoryFileSystem`] - in-memory [`FileSystem`] that counts writes
//! - [`TestProject`] - a temporary Go project directory with a `go.mod`

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::core::{KubegenError, ResourceDescriptor};
use crate::utils::FileSystem;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Module path used by test projects.
pub const TEST_REPO: &str = "github.com/example-inc/app-operator";

/// Initialize logging for tests.
///
/// Uses `level` when given, `RUST_LOG` otherwise, and stays silent when
/// neither is set. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// In-memory [`FileSystem`].
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    writes: AtomicUsize,
}

impl MemoryFileSystem {
    /// Seed a file without counting it as a write.
    pub fn insert(&self, path: &Path, content: &str) {
        self.lock().insert(path.to_path_buf(), content.to_string());
    }

    #[must_use]
    pub fn read(&self, path: &Path) -> Option<String> {
        self.lock().get(path).cloned()
    }

    /// Number of writes made through [`FileSystem::write`].
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.lock().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create(&self, path: &Path, content: &str) -> Result<()> {
        let mut files = self.lock();
        if files.contains_key(path) {
            return Err(KubegenError::AlreadyExists {
                path: path.display().to_string(),
            }
            .into());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// The `AppService` resource in `app.example.com/v1alpha1`.
#[must_use]
pub fn app_service() -> ResourceDescriptor {
    ResourceDescriptor::new("app.example.com/v1alpha1", "AppService")
        .expect("fixture resource is valid")
}

/// A temporary Go project rooted at a fresh directory.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Project with `go.mod` declaring [`TEST_REPO`].
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("go.mod"), format!("module {TEST_REPO}\n\ngo 1.13\n"))?;
        Ok(Self {
            dir,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `relative` inside the project.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    #[must_use]
    pub fn file_exists(&self, relative: &str) -> bool {
        self.dir.path().join(relative).exists()
    }

    pub fn read_file(&self, relative: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.dir.path().join(relative))?)
    }
}

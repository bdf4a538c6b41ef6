//! Supporting utilities.
//!
//! - [`fs`] - the [`FileSystem`] collaborator and atomic file writes

pub mod fs;

pub use fs::{FileSystem, LocalFileSystem, atomic_create, atomic_write, ensure_dir, safe_write};

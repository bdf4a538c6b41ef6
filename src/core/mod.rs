//! Core types and functionality for kubegen
//!
//! This module holds the pieces every other module builds on:
//!
//! - [`error`] - the [`KubegenError`] taxonomy and [`ErrorContext`] for CLI display
//! - [`resource`] - [`ResourceDescriptor`], the validated group/version/kind of a request
//!
//! # Error Handling
//!
//! Library functions return `Result<T, KubegenError>` where the failure mode
//! matters to the caller (custom import parsing, overwrite protection) and
//! `anyhow::Result<T>` for I/O-heavy code, with [`user_friendly_error`]
//! bridging the two for terminal output.

pub mod error;
pub mod resource;

pub use error::{ErrorContext, KubegenError, user_friendly_error};
pub use resource::ResourceDescriptor;

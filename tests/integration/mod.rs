//! Integration test suite for kubegen
//!
//! End-to-end tests that render real controllers, write them into temporary
//! projects and drive the `kubegen` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **golden**: byte-for-byte rendering of the reference controller
//! - **scaffold**: overwrite guard and explicit paths on a real file system
//! - **concurrency**: request isolation under `generate_batch`
//! - **cli**: the `add controller` command

mod cli;
mod concurrency;
mod golden;
mod scaffold;

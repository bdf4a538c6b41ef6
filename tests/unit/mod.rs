//! Unit test suite for kubegen
//!
//! Exercises the import resolution API through the public crate surface.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod custom_import_tests;
mod import_table_tests;

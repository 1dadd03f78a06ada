//! # Conversion Repository
//!
//! Concrete output store implementation (adapter) for the conversion session.
//! This crate provides the JSON file adapter that implements the `OutputStore` port.

mod json_dir;

#[cfg(test)]
mod json_dir_tests;

pub use json_dir::{DEFAULT_FILE_NAME, JsonOutputDir};

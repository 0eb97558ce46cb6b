//! Core utilities and types for urchin.
//!
//! This crate provides the file-writing abstraction and the small string
//! helpers shared by the manifest parser and the code generators.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::{basename, to_camel_case};

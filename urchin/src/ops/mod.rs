//! Core operations.
//!
//! This module contains the business logic for urchin commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod load;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use load::load;

/// Warning emitted when a manifest decodes to nothing.
fn empty_manifest_warnings(entry_count: usize) -> Vec<String> {
    if entry_count == 0 {
        vec!["manifest.json has no entries; every accessor will return an empty array".to_string()]
    } else {
        Vec::new()
    }
}

//! Parsing of Vite's `manifest.json`.
//!
//! The manifest maps original module paths to their versioned build outputs.
//! [`Manifest::parse`] classifies those entries into the four collections a
//! helper generator needs: the asset map, the JS entries, the CSS entries and
//! the dynamic imports to preload.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod span;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ASSET_PREFIX, MANIFEST_FILE_NAME, Manifest, ManifestEntry, ManifestFile, ParsedManifest,
    asset_uri, parse_file, parse_manifest,
};

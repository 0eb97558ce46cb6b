//! Classification of manifest entries into helper collections.

use indexmap::IndexMap;
use urchin_core::basename;

use super::{Manifest, ManifestEntry};
use crate::Result;

/// Public path every versioned asset is served from.
pub const ASSET_PREFIX: &str = "/assets/";

/// Build the public URI for a versioned output file.
///
/// The file name is used verbatim: no normalization, no existence check.
pub fn asset_uri(file: &str) -> String {
    format!("{ASSET_PREFIX}{file}")
}

/// The four collections derived from a manifest.
///
/// Produced in one ordered pass by [`Manifest::parse`] and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    preload: Vec<String>,
    assets: IndexMap<String, String>,
    js_entries: Vec<String>,
    css_entries: Vec<String>,
}

impl ParsedManifest {
    /// URIs of dynamically imported chunks, in manifest then array order.
    pub fn preload(&self) -> &[String] {
        &self.preload
    }

    /// Asset URIs keyed by the basename of their original path.
    pub fn assets(&self) -> &IndexMap<String, String> {
        &self.assets
    }

    /// Look up an asset URI by the basename of its original path.
    pub fn asset(&self, original_name: &str) -> Option<&str> {
        self.assets.get(original_name).map(String::as_str)
    }

    /// URIs of entry point scripts, in manifest order.
    pub fn js_entries(&self) -> &[String] {
        &self.js_entries
    }

    /// URIs of entry point stylesheets, in manifest then array order.
    pub fn css_entries(&self) -> &[String] {
        &self.css_entries
    }

    /// Check if all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.preload.is_empty()
            && self.assets.is_empty()
            && self.js_entries.is_empty()
            && self.css_entries.is_empty()
    }

    /// Split into `(preload, assets, js_entries, css_entries)`.
    pub fn into_parts(
        self,
    ) -> (
        Vec<String>,
        IndexMap<String, String>,
        Vec<String>,
        Vec<String>,
    ) {
        (self.preload, self.assets, self.js_entries, self.css_entries)
    }

    /// Fold one manifest entry into the collections.
    fn with_entry(
        mut self,
        manifest: &Manifest,
        original: &str,
        entry: &ManifestEntry,
    ) -> Result<Self> {
        let uri = asset_uri(&entry.file);

        if entry.has_src() {
            // Basename collisions: the later entry wins
            self.assets.insert(basename(original).to_string(), uri.clone());
        }

        if entry.is_entry {
            self.js_entries.push(uri);
            self.css_entries
                .extend(entry.css.iter().map(|css| asset_uri(css)));

            for name in &entry.dynamic_imports {
                let target = manifest.get(name).ok_or_else(|| {
                    manifest
                        .source()
                        .unknown_dynamic_import_error(name.as_str(), original)
                })?;
                self.preload.push(asset_uri(&target.file));
            }
        }

        Ok(self)
    }
}

impl Manifest {
    /// Classify every entry into the asset map, JS entries, CSS entries and
    /// preload list.
    ///
    /// Fails on the first dynamic import that names a key missing from the
    /// manifest; no partial result is returned.
    pub fn parse(&self) -> Result<ParsedManifest> {
        self.entries()
            .try_fold(ParsedManifest::default(), |parsed, (original, entry)| {
                parsed.with_entry(self, original, entry)
            })
    }
}

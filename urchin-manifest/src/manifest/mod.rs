//! Manifest types and parsing for Vite's manifest.json.

mod entry;
mod file;
mod parse;
mod parsed;

use indexmap::IndexMap;

pub use entry::ManifestEntry;
pub use file::{MANIFEST_FILE_NAME, ManifestFile};
pub use parse::{parse_file, parse_manifest};
pub use parsed::{ASSET_PREFIX, ParsedManifest, asset_uri};

use crate::SourceContext;

/// A decoded manifest.json.
///
/// Entries keep the order in which they appear in the source JSON, so that
/// everything derived from the manifest is reproducible across runs.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: IndexMap<String, ManifestEntry>,
    source: SourceContext,
}

impl Manifest {
    /// Create a manifest from already-decoded entries.
    pub fn new(entries: IndexMap<String, ManifestEntry>, source: SourceContext) -> Self {
        Self { entries, source }
    }

    /// Look up an entry by its original module path.
    pub fn get(&self, original: &str) -> Option<&ManifestEntry> {
        self.entries.get(original)
    }

    /// Iterate over `(original path, entry)` pairs in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source the manifest was decoded from, used for error reporting.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }
}

impl FromIterator<(String, ManifestEntry)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, ManifestEntry)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter().collect(),
            SourceContext::new(String::new(), MANIFEST_FILE_NAME),
        )
    }
}

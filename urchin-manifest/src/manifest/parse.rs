//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;

use super::{MANIFEST_FILE_NAME, Manifest, ManifestEntry, ParsedManifest};
use crate::{Error, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE_NAME)
    }
}

impl Manifest {
    /// Decode a manifest.json file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Decode a manifest.json from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Decode manifest content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let entries: IndexMap<String, ManifestEntry> =
        serde_json::from_str(content).map_err(|e| source.json_error(e))?;
    Ok(Manifest::new(entries, source))
}

/// Read, decode and classify a manifest.json in one step.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedManifest> {
    Manifest::from_file(path)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_preserves_key_order() {
        let manifest = Manifest::from_str(
            r#"{
                "z.js": {"file": "z.js"},
                "a.js": {"file": "a.js"},
                "m.js": {"file": "m.js"}
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = manifest.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z.js", "a.js", "m.js"]);
    }

    #[test]
    fn test_empty_object() {
        let manifest = Manifest::from_str("{}").unwrap();
        assert!(manifest.is_empty());
        assert!(manifest.parse().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = Manifest::from_str("{not json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert_eq!(err.to_string(), "manifest contains invalid JSON");
    }

    #[test]
    fn test_top_level_array_is_schema_error() {
        let err = Manifest::from_str("[]").unwrap_err();
        assert!(matches!(*err, Error::Schema { .. }));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_entry_without_file_is_schema_error() {
        let err = Manifest::from_str(r#"{"main.js": {"isEntry": true}}"#).unwrap_err();
        assert!(matches!(*err, Error::Schema { .. }));
    }

    #[test]
    fn test_filename_is_kept_for_diagnostics() {
        let manifest = Manifest::from_str_with_filename("{}", "public/build/manifest.json").unwrap();
        assert_eq!(manifest.source().filename(), "public/build/manifest.json");
    }
}

//! Load operation - locate, decode and classify manifest.json.

use std::path::Path;

use urchin_manifest::{ManifestFile, ParsedManifest, Result};

use crate::reports::Output;

/// Locate and parse the manifest inside `manifest_dir`.
///
/// A missing manifest fails before any progress is reported. The parsing
/// step is announced before decoding starts, so it precedes any parse
/// diagnostic.
pub fn load(manifest_dir: &Path, out: &mut dyn Output) -> Result<(ManifestFile, ParsedManifest)> {
    let path = ManifestFile::find(manifest_dir)?;

    out.step("Parsing manifest.json file...");
    let file = ManifestFile::open(path)?;
    let parsed = file.parse()?;
    Ok((file, parsed))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use urchin_manifest::{Error, MANIFEST_FILE_NAME};

    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_load_announces_parsing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE_NAME),
            r#"{"main.js": {"file": "main.1.js", "isEntry": true}}"#,
        )
        .unwrap();
        let mut out = RecordingOutput::default();

        let (file, parsed) = load(dir.path(), &mut out).unwrap();

        assert_eq!(out.lines, ["Parsing manifest.json file..."]);
        assert_eq!(file.manifest().len(), 1);
        assert_eq!(parsed.js_entries(), ["/assets/main.1.js"]);
    }

    #[test]
    fn test_parsing_step_precedes_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "{not json").unwrap();
        let mut out = RecordingOutput::default();

        let err = load(dir.path(), &mut out).err().unwrap();

        assert!(err.is_parse_error());
        assert_eq!(out.lines, ["Parsing manifest.json file..."]);
    }

    #[test]
    fn test_missing_manifest_reports_nothing() {
        let dir = TempDir::new().unwrap();
        let mut out = RecordingOutput::default();

        let err = load(dir.path(), &mut out).err().unwrap();

        assert!(matches!(*err, Error::NotFound { .. }));
        assert!(out.lines.is_empty());
    }
}

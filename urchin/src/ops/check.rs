//! Check operation - manifest summary.

use urchin_manifest::{ManifestFile, ParsedManifest};

use crate::reports::CheckReport;

/// Summarize a parsed manifest.
pub fn check(file: &ManifestFile, parsed: &ParsedManifest) -> CheckReport {
    let entry_count = file.manifest().len();

    CheckReport {
        manifest_path: file.path().to_path_buf(),
        entry_count,
        assets: parsed.assets().len(),
        js_entries: parsed.js_entries().len(),
        css_entries: parsed.css_entries().len(),
        preload: parsed.preload().len(),
        warnings: super::empty_manifest_warnings(entry_count),
    }
}

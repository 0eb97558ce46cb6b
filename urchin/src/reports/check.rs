//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Summary of a parsed manifest.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to manifest.json.
    pub manifest_path: PathBuf,
    /// Number of top-level manifest entries.
    pub entry_count: usize,
    /// Number of versioned assets.
    pub assets: usize,
    /// Number of JavaScript entries.
    pub js_entries: usize,
    /// Number of CSS entries.
    pub css_entries: usize,
    /// Number of preloaded chunks.
    pub preload: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));
        out.newline();
        out.key_value_indented("entries", &self.entry_count.to_string());
        out.key_value_indented("assets", &self.assets.to_string());
        out.key_value_indented("js entries", &self.js_entries.to_string());
        out.key_value_indented("css entries", &self.css_entries.to_string());
        out.key_value_indented("preload", &self.preload.to_string());
    }
}

//! Generate command report data structures.

use std::path::PathBuf;

use urchin_core::WriteResult;

use super::output::{Output, Report};

/// Report data from helper generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// What the generated file is called in messages ("helper" or "class").
    pub noun: &'static str,

    /// Number of entries in the versioned asset map.
    pub asset_count: usize,

    /// Warning messages.
    pub warnings: Vec<String>,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of helper generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the file was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Path of the generated file.
    pub path: PathBuf,
    /// Whether the content changed.
    pub write: WriteResult,
    /// Manifest path, if it was deleted afterwards.
    pub deleted_manifest: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Path the file would be written to.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.step(&format!(
            "Generating {} from {} assets...",
            self.noun, self.asset_count
        ));
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        match written.write {
            WriteResult::Written => out.step(&format!(
                "Writing {} to {}...",
                self.noun,
                written.path.display()
            )),
            WriteResult::Unchanged => out.step(&format!(
                "{} is already up to date",
                written.path.display()
            )),
        }

        if written.deleted_manifest.is_some() {
            out.step("Deleting manifest.json...");
        }

        out.success(&format!("Generated {} from manifest!", self.noun));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.newline();
        out.divider(&preview.path.display().to_string());
        out.preformatted(&preview.content);
        out.divider("Summary");
        out.preformatted("Dry run: nothing was written and manifest.json was kept");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn render(report: &GenerateReport) -> Vec<String> {
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        out.lines
    }

    #[test]
    fn test_written_with_delete() {
        let report = GenerateReport {
            noun: "helper",
            asset_count: 3,
            warnings: vec![],
            result: GenerationResult::Written(WrittenResult {
                path: PathBuf::from("app/assets.php"),
                write: WriteResult::Written,
                deleted_manifest: Some(PathBuf::from("public/build/manifest.json")),
            }),
        };

        assert_eq!(
            render(&report),
            [
                "Generating helper from 3 assets...",
                "Writing helper to app/assets.php...",
                "Deleting manifest.json...",
                "✓ Generated helper from manifest!",
            ]
        );
    }

    #[test]
    fn test_unchanged_file() {
        let report = GenerateReport {
            noun: "class",
            asset_count: 0,
            warnings: vec!["manifest.json has no entries".to_string()],
            result: GenerationResult::Written(WrittenResult {
                path: PathBuf::from("app/Assets.php"),
                write: WriteResult::Unchanged,
                deleted_manifest: None,
            }),
        };

        let lines = render(&report);
        assert_eq!(lines[0], "Generating class from 0 assets...");
        assert_eq!(lines[1], "warning: manifest.json has no entries");
        assert!(lines.contains(&"app/Assets.php is already up to date".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Deleting")));
    }

    #[test]
    fn test_preview() {
        let report = GenerateReport {
            noun: "helper",
            asset_count: 1,
            warnings: vec![],
            result: GenerationResult::Preview(PreviewResult {
                path: PathBuf::from("app/assets.php"),
                content: "<?php\n".to_string(),
            }),
        };

        let lines = render(&report);
        assert!(lines.contains(&"── app/assets.php ──".to_string()));
        assert!(lines.contains(&"<?php\n".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Writing")));
    }
}

//! Generate operation - helper file from manifest.

use std::path::Path;

use eyre::{Context, Result};
use urchin_codegen_php::{Generator, HelperCodegen, HelperStyle};
use urchin_manifest::{ManifestFile, ParsedManifest};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the helper file is written to.
    pub helper_dir: &'a Path,
    /// Whether to delete manifest.json after a successful write.
    pub delete_manifest: bool,
    /// Whether to preview without touching the filesystem.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The helper is rendered in full before anything is written, and the
/// manifest is only deleted once the write succeeded. A dry run never
/// writes or deletes.
pub fn generate(
    file: ManifestFile,
    parsed: &ParsedManifest,
    style: HelperStyle,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(parsed, style);
    let noun = match generator.style() {
        HelperStyle::Functions => "helper",
        HelperStyle::Class { .. } => "class",
    };
    let warnings = super::empty_manifest_warnings(file.manifest().len());

    let result = if opts.dry_run {
        let preview = generator
            .preview()
            .wrap_err_with(|| format!("Failed to generate {noun}"))?;
        GenerationResult::Preview(PreviewResult {
            path: opts.helper_dir.join(preview.path),
            content: preview.content,
        })
    } else {
        let generated = generator
            .generate(opts.helper_dir)
            .wrap_err_with(|| format!("Failed to generate {noun}"))?;

        let deleted_manifest = if opts.delete_manifest {
            let path = file.path().to_path_buf();
            file.remove()
                .wrap_err_with(|| format!("Failed to delete {}", path.display()))?;
            Some(path)
        } else {
            None
        };

        GenerationResult::Written(WrittenResult {
            path: generated.path,
            write: generated.write,
            deleted_manifest,
        })
    };

    Ok(GenerateReport {
        noun,
        asset_count: parsed.assets().len(),
        warnings,
        result,
    })
}

//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use urchin_core::WriteResult;

/// Trait for generators that turn a parsed manifest into a helper file.
///
/// Implement this trait to emit the asset helper in another language or
/// style.
pub trait HelperCodegen {
    /// Language identifier (e.g., "php")
    fn language(&self) -> &'static str;

    /// Name of the generated file inside the output directory
    fn file_name(&self) -> &'static str;

    /// Render the complete file content
    fn render(&self) -> Result<String>;

    /// Preview the generated file without writing to disk
    fn preview(&self) -> Result<PreviewFile> {
        Ok(PreviewFile {
            path: self.file_name().to_string(),
            content: self.render()?,
        })
    }

    /// Generate the helper file into the specified output directory.
    ///
    /// Implementations must render the content completely before anything
    /// touches the disk.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the generated file
    pub path: PathBuf,
    /// Whether the file was written or already up to date
    pub write: WriteResult,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

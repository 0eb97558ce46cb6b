//! assets.php procedural helper.

use std::path::{Path, PathBuf};

use urchin_core::GeneratedFile;
use urchin_manifest::ParsedManifest;

use crate::{
    PhpFile,
    accessors::{AccessorKind, accessors},
};

/// The `assets.php` helper: free functions in the global namespace.
pub struct AssetsHelper<'a> {
    parsed: &'a ParsedManifest,
    generated_at: String,
}

impl<'a> AssetsHelper<'a> {
    pub const FILE_NAME: &'static str = "assets.php";

    pub fn new(parsed: &'a ParsedManifest, generated_at: impl Into<String>) -> Self {
        Self {
            parsed,
            generated_at: generated_at.into(),
        }
    }
}

impl GeneratedFile for AssetsHelper<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILE_NAME)
    }

    fn render(&self) -> String {
        PhpFile::new()
            .comment(super::header(&self.generated_at))
            .strict_types()
            .add_all(accessors(
                self.parsed,
                &self.generated_at,
                AccessorKind::Function,
            ))
            .render()
    }
}

use std::path::{Path, PathBuf};

use super::{Manifest, ParsedManifest};
use crate::{Error, Result};

/// File name Vite writes its manifest to.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// A manifest.json on disk together with its decoded contents.
pub struct ManifestFile {
    path: PathBuf,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open the manifest.json inside `dir`.
    ///
    /// Fails with [`Error::NotFound`] before any parsing is attempted when
    /// the file is absent.
    pub fn locate(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(Self::find(dir)?)
    }

    /// Path of the manifest.json inside `dir`, without reading it.
    ///
    /// Fails with [`Error::NotFound`] when the file is absent.
    pub fn find(dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(MANIFEST_FILE_NAME);
        if !path.is_file() {
            return Err(Error::not_found(path));
        }
        Ok(path)
    }

    /// Open and decode a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;
        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the decoded manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Classify the manifest entries.
    pub fn parse(&self) -> Result<ParsedManifest> {
        self.manifest.parse()
    }

    /// Delete the manifest file from disk.
    pub fn remove(self) -> Result<()> {
        std::fs::remove_file(&self.path).map_err(|e| Error::io(&self.path, e))
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use urchin_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory containing Vite's manifest.json
    pub manifest_dir: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::locate(&self.manifest_dir).unwrap_or_exit();
        let parsed = file.parse().unwrap_or_exit();

        ops::check(&file, &parsed).render(&mut TerminalOutput::new());
        Ok(())
    }
}

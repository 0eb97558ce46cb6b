use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use urchin_codegen_php::HelperStyle;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Arguments shared by both generate commands.
#[derive(Args)]
pub struct GenerateArgs {
    /// Directory to write the generated file to
    pub helper_dir: PathBuf,

    /// Directory containing Vite's manifest.json
    pub manifest_dir: PathBuf,

    /// Delete manifest.json once the file has been written
    #[arg(short, long)]
    pub delete_manifest: bool,

    /// Print the generated file without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    fn run(&self, style: HelperStyle) -> Result<()> {
        let mut out = TerminalOutput::new();
        let (file, parsed) = ops::load(&self.manifest_dir, &mut out).unwrap_or_exit();

        let report = ops::generate(
            file,
            &parsed,
            style,
            GenerateOptions {
                helper_dir: &self.helper_dir,
                delete_manifest: self.delete_manifest,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut out);
        Ok(())
    }
}

#[derive(Args)]
pub struct GenerateHelperCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

impl GenerateHelperCommand {
    /// Run the generate-helper command
    pub fn run(&self) -> Result<()> {
        self.args.run(HelperStyle::Functions)
    }
}

#[derive(Args)]
pub struct GenerateClassCommand {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// PHP namespace for the generated class (e.g. App\Support)
    #[arg(short, long)]
    pub namespace: Option<String>,
}

impl GenerateClassCommand {
    /// Run the generate-class command
    pub fn run(&self) -> Result<()> {
        self.args.run(HelperStyle::Class {
            namespace: self.namespace.clone(),
        })
    }
}

//! PHP asset helper generator.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use eyre::Result;
use urchin_codegen::language::{GenerateResult, HelperCodegen};
use urchin_core::GeneratedFile;
use urchin_manifest::ParsedManifest;

use crate::{
    files::{AssetsClass, AssetsHelper},
    naming::validate_namespace,
};

/// Which kind of helper file to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperStyle {
    /// `assets.php` with free functions.
    Functions,
    /// `Assets.php` with a `final class Assets`, optionally namespaced.
    Class { namespace: Option<String> },
}

/// PHP generator turning a parsed manifest into an asset helper.
pub struct Generator<'a> {
    parsed: &'a ParsedManifest,
    style: HelperStyle,
    generated_at: DateTime<FixedOffset>,
}

impl HelperCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_name(&self) -> &'static str {
        match self.style {
            HelperStyle::Functions => AssetsHelper::FILE_NAME,
            HelperStyle::Class { .. } => AssetsClass::FILE_NAME,
        }
    }

    fn render(&self) -> Result<String> {
        Ok(self.file()?.render())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let file = self.file()?;
        let write = file.write(output_dir)?;
        Ok(GenerateResult {
            path: file.path(output_dir),
            write,
        })
    }
}

impl<'a> Generator<'a> {
    /// Create a generator for the given style, stamped with the current
    /// local time.
    pub fn new(parsed: &'a ParsedManifest, style: HelperStyle) -> Self {
        Self {
            parsed,
            style,
            generated_at: Local::now().fixed_offset(),
        }
    }

    /// Generator for the procedural `assets.php` helper.
    pub fn functions(parsed: &'a ParsedManifest) -> Self {
        Self::new(parsed, HelperStyle::Functions)
    }

    /// Generator for the `Assets.php` class helper.
    pub fn class(parsed: &'a ParsedManifest, namespace: Option<String>) -> Self {
        Self::new(parsed, HelperStyle::Class { namespace })
    }

    /// Override the generation timestamp.
    pub fn generated_at(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.generated_at = timestamp;
        self
    }

    /// The kind of helper this generator emits.
    pub fn style(&self) -> &HelperStyle {
        &self.style
    }

    /// Timestamp in PHP's `DATE_ATOM` format.
    fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    fn file(&self) -> Result<Box<dyn GeneratedFile + 'a>> {
        let timestamp = self.timestamp();
        let file: Box<dyn GeneratedFile + 'a> = match &self.style {
            HelperStyle::Functions => Box::new(AssetsHelper::new(self.parsed, timestamp)),
            HelperStyle::Class { namespace } => {
                let class = AssetsClass::new(self.parsed, timestamp);
                match namespace {
                    Some(namespace) => Box::new(class.namespace(validate_namespace(namespace)?)),
                    None => Box::new(class),
                }
            }
        };
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use urchin_core::WriteResult;

    use super::*;

    fn timestamp() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-05-01T14:30:00+02:00").unwrap()
    }

    #[test]
    fn test_file_names() {
        let parsed = ParsedManifest::default();
        assert_eq!(Generator::functions(&parsed).file_name(), "assets.php");
        assert_eq!(Generator::class(&parsed, None).file_name(), "Assets.php");
        assert_eq!(Generator::functions(&parsed).language(), "php");
    }

    #[test]
    fn test_style_reflects_constructor() {
        let parsed = ParsedManifest::default();
        assert_eq!(Generator::functions(&parsed).style(), &HelperStyle::Functions);
        assert_eq!(
            Generator::class(&parsed, Some("App".to_string())).style(),
            &HelperStyle::Class {
                namespace: Some("App".to_string())
            }
        );
    }

    #[test]
    fn test_timestamp_is_atom_format() {
        let parsed = ParsedManifest::default();
        let generator = Generator::functions(&parsed).generated_at(timestamp());
        assert_eq!(generator.timestamp(), "2024-05-01T14:30:00+02:00");

        let utc = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z").unwrap();
        let generator = Generator::functions(&parsed).generated_at(utc);
        assert_eq!(generator.timestamp(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn test_invalid_namespace_is_rejected() {
        let parsed = ParsedManifest::default();
        let generator = Generator::class(&parsed, Some("App\\".to_string()));
        assert!(generator.render().is_err());

        let dir = TempDir::new().unwrap();
        assert!(generator.generate(dir.path()).is_err());
        assert!(!dir.path().join("Assets.php").exists());
    }

    #[test]
    fn test_preview_matches_render() {
        let parsed = ParsedManifest::default();
        let generator = Generator::functions(&parsed).generated_at(timestamp());

        let preview = generator.preview().unwrap();
        assert_eq!(preview.path, "assets.php");
        assert_eq!(preview.content, generator.render().unwrap());
    }

    #[test]
    fn test_generate_then_unchanged() {
        let parsed = ParsedManifest::default();
        let generator = Generator::class(&parsed, Some("\\App".to_string()))
            .generated_at(timestamp());
        let dir = TempDir::new().unwrap();

        let first = generator.generate(dir.path()).unwrap();
        assert_eq!(first.path, dir.path().join("Assets.php"));
        assert_eq!(first.write, WriteResult::Written);

        let second = generator.generate(dir.path()).unwrap();
        assert_eq!(second.write, WriteResult::Unchanged);

        let content = std::fs::read_to_string(&first.path).unwrap();
        assert!(content.contains("namespace App;\n"));
    }
}

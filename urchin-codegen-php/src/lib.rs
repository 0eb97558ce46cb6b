//! PHP code generator for urchin.
//!
//! Renders a [`ParsedManifest`](urchin_manifest::ParsedManifest) into a PHP
//! helper that a backend application can use to reference versioned assets.
//!
//! # Usage
//!
//! ```ignore
//! use urchin_codegen_php::{Generator, HelperCodegen};
//! use urchin_manifest::parse_file;
//! use std::path::Path;
//!
//! let parsed = parse_file("public/build/manifest.json")?;
//! let generator = Generator::class(&parsed, Some("App\\Support".to_string()));
//!
//! // Preview without writing
//! let file = generator.preview()?;
//!
//! // Write Assets.php into the output directory
//! let result = generator.generate(Path::new("app/Support"))?;
//! ```
//!
//! # Generated Output
//!
//! - `assets.php` - free functions (`get_versioned_asset()`, ...)
//! - `Assets.php` - a `final class Assets` with static methods
//!   (`Assets::getVersionedAsset()`, ...), optionally namespaced

mod accessors;
mod generator;
mod naming;
mod php_file;

pub mod ast;
pub mod files;

pub use generator::{Generator, HelperStyle};
pub use naming::validate_namespace;
pub use php_file::PhpFile;
pub use urchin_codegen::language::{GenerateResult, HelperCodegen, PreviewFile};

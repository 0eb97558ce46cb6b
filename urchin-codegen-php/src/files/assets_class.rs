//! Assets.php class helper.

use std::path::{Path, PathBuf};

use urchin_core::GeneratedFile;
use urchin_manifest::ParsedManifest;

use crate::{
    PhpFile,
    accessors::{AccessorKind, accessors},
    ast::Class,
};

const CLASS_DOC: &str = "This class allows for retrieving of versioned assets processed from Vite.";

/// The `Assets.php` helper: a `final class Assets` with static accessors.
///
/// The namespace is expected to be validated already (see
/// [`validate_namespace`](crate::validate_namespace)).
pub struct AssetsClass<'a> {
    parsed: &'a ParsedManifest,
    generated_at: String,
    namespace: Option<String>,
}

impl<'a> AssetsClass<'a> {
    pub const FILE_NAME: &'static str = "Assets.php";
    pub const CLASS_NAME: &'static str = "Assets";

    pub fn new(parsed: &'a ParsedManifest, generated_at: impl Into<String>) -> Self {
        Self {
            parsed,
            generated_at: generated_at.into(),
            namespace: None,
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl GeneratedFile for AssetsClass<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILE_NAME)
    }

    fn render(&self) -> String {
        let class = Class::new(Self::CLASS_NAME)
            .doc(CLASS_DOC)
            .final_()
            .methods(accessors(
                self.parsed,
                &self.generated_at,
                AccessorKind::StaticMethod,
            ));

        let file = PhpFile::new()
            .comment(super::header(&self.generated_at))
            .strict_types();

        // Global code resolves DateTimeImmutable without an import
        let file = match &self.namespace {
            Some(namespace) => file.namespace(namespace).use_("DateTimeImmutable"),
            None => file,
        };

        file.add(class).render()
    }
}

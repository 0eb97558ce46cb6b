//! PhpFile abstraction for structured PHP file generation.

use urchin_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a PHP source file.
///
/// Sections are rendered in the order PSR-12 prescribes: opening tag, file
/// doc block, `declare`, `namespace`, `use` imports, then the body. Every
/// section is separated from the next by exactly one blank line.
///
/// # Example
///
/// ```ignore
/// let file = PhpFile::new()
///     .comment("Generated file")
///     .strict_types()
///     .namespace("App\\Support")
///     .use_("DateTimeImmutable")
///     .add(class)
///     .render();
/// ```
#[derive(Default)]
pub struct PhpFile {
    comment: Option<String>,
    strict_types: bool,
    namespace: Option<String>,
    uses: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl PhpFile {
    /// Create a new empty PhpFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file-level doc block.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Emit `declare(strict_types=1);`.
    pub fn strict_types(mut self) -> Self {
        self.strict_types = true;
        self
    }

    /// Place the body in a namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a `use` import.
    pub fn use_(mut self, name: impl Into<String>) -> Self {
        self.uses.push(name.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with PSR-12 indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut sections: Vec<Vec<CodeFragment>> = vec![vec![CodeFragment::line("<?php")]];

        if let Some(comment) = &self.comment {
            sections.push(vec![CodeFragment::doc_block(comment)]);
        }
        if self.strict_types {
            sections.push(vec![CodeFragment::line("declare(strict_types=1);")]);
        }
        if let Some(namespace) = &self.namespace {
            sections.push(vec![CodeFragment::Line(format!("namespace {};", namespace))]);
        }
        if !self.uses.is_empty() {
            sections.push(
                self.uses
                    .iter()
                    .map(|name| CodeFragment::Line(format!("use {};", name)))
                    .collect(),
            );
        }
        sections.extend(self.body.iter().cloned());

        let mut builder = CodeBuilder::php();
        for (i, fragments) in sections.into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}

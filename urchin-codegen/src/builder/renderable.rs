//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without newline.
    Raw(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `/** ... */` doc block, one entry per line. Empty entries render as
    /// a bare ` *`.
    DocBlock(Vec<String>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a doc block from multi-line text.
    pub fn doc_block(text: &str) -> Self {
        Self::DocBlock(text.lines().map(str::to_string).collect())
    }
}

/// Trait for AST nodes that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node into a list of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable> Renderable for Vec<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

impl<T: Renderable> Renderable for Option<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().map(Renderable::to_fragments).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str);

    impl Renderable for Line {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(self.0)]
        }
    }

    #[test]
    fn test_doc_block_splits_lines() {
        assert_eq!(
            CodeFragment::doc_block("Summary\n\n@return string"),
            CodeFragment::DocBlock(vec![
                "Summary".to_string(),
                String::new(),
                "@return string".to_string(),
            ])
        );
    }

    #[test]
    fn test_vec_renders_in_order() {
        let nodes = vec![Line("a"), Line("b")];
        assert_eq!(
            nodes.to_fragments(),
            vec![CodeFragment::line("a"), CodeFragment::line("b")]
        );
    }

    #[test]
    fn test_none_renders_nothing() {
        let node: Option<Line> = None;
        assert!(node.to_fragments().is_empty());
    }
}

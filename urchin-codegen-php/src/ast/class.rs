//! PHP class builder.

use urchin_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Function;

/// Builder for PHP classes holding methods.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    is_final: bool,
    methods: Vec<Function>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_final: false,
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn method(mut self, method: Function) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Function>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc_block(doc));
        }

        let keyword = if self.is_final { "final class" } else { "class" };
        fragments.push(CodeFragment::Line(format!("{} {}", keyword, self.name)));

        // Blank line between methods
        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }

        fragments.push(CodeFragment::block("{", body, Some("}".to_string())));
        fragments
    }
}

//! PHP function and method builder.

use urchin_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Method visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// A typed parameter (`string $original_name`).
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for PHP functions and methods.
///
/// A function becomes a method as soon as it gets a visibility; modifiers are
/// emitted in PSR-12 order (`final`, visibility, `static`).
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    doc: Option<String>,
    is_final: bool,
    visibility: Option<Visibility>,
    is_static: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_final: false,
            visibility: None,
            is_static: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Set the doc block text; `\n` separates lines.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a renderable node to the function body.
    pub fn body(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Add pre-built fragments to the function body.
    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Get the function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format the signature line (without the opening brace).
    fn format_signature(&self) -> String {
        let mut modifiers = Vec::new();
        if self.is_final {
            modifiers.push("final");
        }
        if let Some(visibility) = self.visibility {
            modifiers.push(visibility.as_str());
        }
        if self.is_static {
            modifiers.push("static");
        }
        modifiers.push("function");

        let params = self
            .params
            .iter()
            .map(|p| format!("{} ${}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let signature = format!("{} {}({})", modifiers.join(" "), self.name, params);
        match &self.return_type {
            Some(ret) => format!("{signature}: {ret}"),
            None => signature,
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc_block(doc));
        }

        // PSR-12: opening brace of functions and methods on its own line
        fragments.push(CodeFragment::line(self.format_signature()));
        fragments.push(CodeFragment::block(
            "{",
            self.body.clone(),
            Some("}".to_string()),
        ));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PhpValue;

    #[test]
    fn test_simple_function() {
        let f = Function::new("hello").build();
        assert_eq!(f, "function hello()\n{\n}\n");
    }

    #[test]
    fn test_function_with_params_and_return() {
        let f = Function::new("get_versioned_asset")
            .param(Param::new("original_name", "string"))
            .returns("?string")
            .body_line("return null;")
            .build();
        assert_eq!(
            f,
            "function get_versioned_asset(string $original_name): ?string\n{\n    return null;\n}\n"
        );
    }

    #[test]
    fn test_method_modifier_order() {
        let f = Function::new("getJsEntries")
            .static_()
            .visibility(Visibility::Public)
            .final_()
            .returns("array")
            .build();
        assert!(f.starts_with("final public static function getJsEntries(): array\n"));
    }

    #[test]
    fn test_private_method() {
        let f = Function::new("helper").visibility(Visibility::Private).build();
        assert!(f.starts_with("private function helper()\n"));
    }

    #[test]
    fn test_doc_block() {
        let f = Function::new("get_js_entries")
            .doc("Returns the entries\n\n@return string[]")
            .build();
        assert!(f.starts_with("/**\n * Returns the entries\n *\n * @return string[]\n */\n"));
    }

    #[test]
    fn test_renderable_body() {
        let f = Function::new("get_css_entries")
            .returns("array")
            .body_fragments(PhpValue::string_list(["/assets/a.css"]).fragments("return ", ";"))
            .build();
        assert_eq!(
            f,
            "function get_css_entries(): array\n{\n    return [\n        '/assets/a.css',\n    ];\n}\n"
        );
    }

    #[test]
    fn test_body_node() {
        let f = Function::new("get_value")
            .body(&PhpValue::string("x"))
            .build();
        assert!(f.contains("    'x'\n"));
        assert_eq!(Function::new("get_value").name(), "get_value");
    }
}

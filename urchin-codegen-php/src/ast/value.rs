//! PHP literal values.

use urchin_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Quote a string as a single-quoted PHP literal.
///
/// Inside single quotes PHP only interprets `\\` and `\'`, so escaping those
/// two is enough to round-trip any string.
pub fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// A PHP literal: a string or a short-syntax array.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    /// A single-quoted string.
    Str(String),
    /// A list array (`['a', 'b']`).
    List(Vec<PhpValue>),
    /// An associative array with string keys (`['k' => 'v']`).
    Map(Vec<(String, PhpValue)>),
}

impl PhpValue {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Create a list of strings.
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Self::string).collect())
    }

    /// Create a string-keyed map of strings, keeping iteration order.
    pub fn string_map<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Map(
            items
                .into_iter()
                .map(|(k, v)| (k.into(), Self::string(v)))
                .collect(),
        )
    }

    /// Render as fragments, wrapping the first line in `prefix` and the last
    /// in `suffix`. Non-empty arrays get one element per line.
    pub fn fragments(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        match self {
            Self::Str(s) => vec![CodeFragment::Line(format!("{prefix}{}{suffix}", quote(s)))],
            Self::List(items) if items.is_empty() => {
                vec![CodeFragment::Line(format!("{prefix}[]{suffix}"))]
            }
            Self::Map(items) if items.is_empty() => {
                vec![CodeFragment::Line(format!("{prefix}[]{suffix}"))]
            }
            Self::List(items) => array_fragments(
                prefix,
                suffix,
                items.iter().flat_map(|item| item.fragments("", ",")),
            ),
            Self::Map(items) => array_fragments(
                prefix,
                suffix,
                items.iter().flat_map(|(key, item)| {
                    item.fragments(&format!("{} => ", quote(key)), ",")
                }),
            ),
        }
    }

    /// Render as a standalone expression.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build()
    }
}

fn array_fragments(
    prefix: &str,
    suffix: &str,
    items: impl Iterator<Item = CodeFragment>,
) -> Vec<CodeFragment> {
    vec![
        CodeFragment::Line(format!("{prefix}[")),
        CodeFragment::Indent(items.collect()),
        CodeFragment::Line(format!("]{suffix}")),
    ]
}

impl Renderable for PhpValue {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments("", "")
    }
}

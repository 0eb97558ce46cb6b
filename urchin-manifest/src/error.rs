use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::error::Category;
use thiserror::Error;

use crate::span;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the raw manifest text and its filename around so that errors raised
/// after decoding can still point into the original JSON.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an error from a serde_json decoding failure.
    ///
    /// Syntax errors become [`Error::Parse`]; well-formed JSON with the wrong
    /// shape becomes [`Error::Schema`].
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span::offset_of(&self.src, source.line(), source.column())
            .map(|offset| span::point(&self.src, offset));

        match source.classify() {
            Category::Syntax | Category::Eof | Category::Io => Box::new(Error::Parse {
                src: self.named_source(),
                span,
                source,
            }),
            Category::Data => Box::new(Error::Schema {
                src: self.named_source(),
                span,
                source,
            }),
        }
    }

    /// Create an unknown dynamic import error.
    pub fn unknown_dynamic_import_error(
        &self,
        name: impl Into<String>,
        importer: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        let importer = importer.into();
        Box::new(Error::UnknownDynamicImport {
            src: self.named_source(),
            span: span::find_dynamic_import(&self.src, &importer, &name),
            name,
            importer,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("manifest not found at expected path: {path}")]
    #[diagnostic(
        code(urchin::not_found),
        help("enable `build.manifest` in your Vite config and run `vite build` first")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(urchin::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest contains invalid JSON")]
    #[diagnostic(code(urchin::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest does not match the expected schema")]
    #[diagnostic(
        code(urchin::schema_error),
        help("every manifest entry must be an object with at least a string `file` field")
    )]
    Schema {
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected value here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("dynamic import references unknown entry: {name}")]
    #[diagnostic(
        code(urchin::unknown_dynamic_import),
        help("'{importer}' lists '{name}' in `dynamicImports` but the manifest has no such key")
    )]
    UnknownDynamicImport {
        #[source_code]
        src: NamedSource<String>,
        #[label("no manifest entry with this key")]
        span: Option<SourceSpan>,
        name: String,
        importer: String,
    },
}

impl Error {
    /// Whether this error came from the manifest content rather than the
    /// filesystem.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::Schema { .. } | Error::UnknownDynamicImport { .. }
        )
    }

    /// Create a not found error for the given path
    pub fn not_found(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::NotFound { path: path.into() })
    }

    /// Create an error for a failed read of `path`.
    ///
    /// A missing file maps to [`Error::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        Box::new(Error::Io { path, source })
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for document operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
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

    /// Spans of every quoted occurrence of `text` in the source.
    pub fn find_spans(&self, text: &str) -> Vec<SourceSpan> {
        let quoted = format!("\"{}\"", text);
        self.src
            .match_indices(&quoted)
            .map(|(offset, _)| SourceSpan::from((offset + 1, text.len())))
            .collect()
    }

    /// Span of the first quoted occurrence of `text` in the source.
    pub fn find_span(&self, text: &str) -> Option<SourceSpan> {
        self.find_spans(text).into_iter().next()
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self
            .offset_of(source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a duplicate operation id error.
    pub fn duplicate_operation_error(&self, id: impl Into<String>) -> Box<Error> {
        let id = id.into();
        let spans = self.find_spans(&id);
        Box::new(Error::DuplicateOperation {
            src: self.named_source(),
            first_span: spans.first().copied(),
            second_span: spans.get(1).copied(),
            id,
        })
    }

    /// Create an error for a second operation on an already declared route.
    ///
    /// Each site is a path as written plus its position among the
    /// operations declared with that same text.
    pub fn duplicate_route_error(
        &self,
        method: impl Into<String>,
        first: (&str, usize),
        second: (&str, usize),
    ) -> Box<Error> {
        let span_of = |(path, nth): (&str, usize)| self.find_spans(path).get(nth).copied();
        Box::new(Error::DuplicateRoute {
            src: self.named_source(),
            first_span: span_of(first),
            second_span: span_of(second),
            method: method.into(),
            path: second.0.to_string(),
        })
    }

    /// Create an invalid path template error.
    pub fn invalid_path_error(
        &self,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let path = path.into();
        Box::new(Error::InvalidPath {
            src: self.named_source(),
            span: self.find_span(&path),
            path,
            reason: reason.into(),
        })
    }

    /// Create a missing placeholder error for a path parameter.
    pub fn missing_placeholder_error(
        &self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Box<Error> {
        let path = path.into();
        Box::new(Error::MissingPlaceholder {
            src: self.named_source(),
            span: self.find_span(&path),
            name: name.into(),
            path,
        })
    }

    /// Byte offset of a 1-based line and column.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        Some((line_start + column.saturating_sub(1)).min(self.src.len()))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the API document with '--input <file>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse API document")]
    #[diagnostic(code(apigen::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse API document")]
    #[diagnostic(code(apigen::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate operation id '{id}'")]
    #[diagnostic(
        code(apigen::duplicate_operation),
        help("operation ids name the generated handlers and must be unique")
    )]
    DuplicateOperation {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        id: String,
    },

    #[error("duplicate route {method} '{path}'")]
    #[diagnostic(
        code(apigen::duplicate_route),
        help("a method and path template may be declared by one operation only")
    )]
    DuplicateRoute {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        method: String,
        path: String,
    },

    #[error("invalid path template '{path}'")]
    #[diagnostic(
        code(apigen::invalid_path),
        help("{reason}. Paths start with '/' and use '{{name}}' placeholders.")
    )]
    InvalidPath {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid path")]
        span: Option<SourceSpan>,
        path: String,
        reason: String,
    },

    #[error("path parameter '{name}' does not appear in '{path}'")]
    #[diagnostic(
        code(apigen::missing_placeholder),
        help("add '{{{name}}}' to the path or change the parameter location")
    )]
    MissingPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared path")]
        span: Option<SourceSpan>,
        name: String,
        path: String,
    },

    #[error("{message}")]
    #[diagnostic(code(apigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

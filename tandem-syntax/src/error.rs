use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Span;

/// Result type for syntax operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the source text and filename so the lexer and parser can build
/// span-labelled diagnostics without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn unexpected_char(&self, ch: char, span: Span) -> Box<Error> {
        Box::new(Error::UnexpectedChar {
            src: self.named_source(),
            span: span.into(),
            ch,
        })
    }

    pub fn unterminated_comment(&self, span: Span) -> Box<Error> {
        Box::new(Error::UnterminatedComment {
            src: self.named_source(),
            span: span.into(),
        })
    }

    pub fn integer_overflow(&self, span: Span) -> Box<Error> {
        Box::new(Error::IntegerOverflow {
            src: self.named_source(),
            span: span.into(),
        })
    }

    pub fn unexpected_token(
        &self,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Box<Error> {
        Box::new(Error::UnexpectedToken {
            src: self.named_source(),
            span: span.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }

    pub fn duplicate_namespace(&self, first: Span, second: Span) -> Box<Error> {
        Box::new(Error::DuplicateNamespace {
            src: self.named_source(),
            first: first.into(),
            second: second.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected character '{ch}'")]
    #[diagnostic(code(tandem::syntax::unexpected_char))]
    UnexpectedChar {
        #[source_code]
        src: NamedSource<String>,
        #[label("not valid here")]
        span: SourceSpan,
        ch: char,
    },

    #[error("unterminated block comment")]
    #[diagnostic(code(tandem::syntax::unterminated_comment), help("close it with '*/'"))]
    UnterminatedComment {
        #[source_code]
        src: NamedSource<String>,
        #[label("comment starts here")]
        span: SourceSpan,
    },

    #[error("integer literal out of range")]
    #[diagnostic(
        code(tandem::syntax::integer_overflow),
        help("constants must fit in a signed 64-bit integer")
    )]
    IntegerOverflow {
        #[source_code]
        src: NamedSource<String>,
        #[label("too large")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(tandem::syntax::unexpected_token))]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}")]
        span: SourceSpan,
        expected: String,
        found: String,
    },

    #[error("namespace declared more than once")]
    #[diagnostic(
        code(tandem::syntax::duplicate_namespace),
        help("a file has a single namespace; split the types into separate files")
    )]
    DuplicateNamespace {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first: SourceSpan,
        #[label("declared again here")]
        second: SourceSpan,
    },
}

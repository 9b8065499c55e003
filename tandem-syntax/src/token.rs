//! Tokens produced by the lexer.

use miette::SourceSpan;

/// Byte range in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from((span.start, span.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Int(i64),
    // Keywords
    Use,
    Namespace,
    Type,
    Const,
    IntType,
    // Punctuation
    At,
    Dot,
    Semi,
    Colon,
    Eq,
    LBrace,
    RBrace,
    Eof,
}

impl TokenKind {
    pub fn keyword(text: &str) -> Option<Self> {
        match text {
            "use" => Some(Self::Use),
            "namespace" => Some(Self::Namespace),
            "type" => Some(Self::Type),
            "const" => Some(Self::Const),
            "int" => Some(Self::IntType),
            _ => None,
        }
    }

    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Ident(name) => format!("identifier '{}'", name),
            Self::Int(value) => format!("integer '{}'", value),
            Self::Use => "'use'".into(),
            Self::Namespace => "'namespace'".into(),
            Self::Type => "'type'".into(),
            Self::Const => "'const'".into(),
            Self::IntType => "'int'".into(),
            Self::At => "'@'".into(),
            Self::Dot => "'.'".into(),
            Self::Semi => "';'".into(),
            Self::Colon => "':'".into(),
            Self::Eq => "'='".into(),
            Self::LBrace => "'{'".into(),
            Self::RBrace => "'}'".into(),
            Self::Eof => "end of file".into(),
        }
    }
}

/// A token paired with its location in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

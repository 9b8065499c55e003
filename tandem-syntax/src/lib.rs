//! The tandem declaration language (`.tdl`).
//!
//! A `.tdl` file declares marked types inside an optional file-scoped
//! namespace:
//!
//! ```text
//! use Gen;
//! namespace Demo;
//!
//! @GenerateA
//! type UserModel {
//!     const Version: int = 3;
//! }
//! ```
//!
//! [`parse`] turns source text into a [`SourceFile`], [`lower`] resolves its
//! markers into IR declarations, and [`print`] renders a [`SourceFile`] back
//! into canonical text. Generated units are rendered with the same printer,
//! so anything a stage emits reparses.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod error;
mod lexer;
mod lower;
mod parser;
mod printer;
mod token;

use std::path::Path;

pub use ast::{ConstItem, Ident, Path as AstPath, SourceFile, TypeDecl};
pub use error::{Error, Result, SourceContext};
pub use lexer::Lexer;
pub use lower::lower;
pub use parser::Parser;
pub use printer::print;
pub use tandem_core::SOURCE_EXTENSION;
pub use token::{Span, Token, TokenKind};

/// Parse declaration source, using `filename` for error reporting.
pub fn parse(src: &str, filename: &str) -> Result<SourceFile> {
    let ctx = SourceContext::new(src, filename);
    Parser::new(&ctx).parse_file()
}

/// Read and parse a declaration source file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SourceFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse(&content, &path.display().to_string())
}

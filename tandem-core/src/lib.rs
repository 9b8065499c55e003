//! Core utilities and types for the tandem code generator.
//!
//! This crate provides the small pieces shared by every other tandem crate:
//! identifier rules for the declaration language, an indentation-aware
//! text builder, and the file-writing rules used when generated units land
//! on disk.

/// File extension of declaration sources.
pub const SOURCE_EXTENSION: &str = "tdl";

mod builder;
mod file;
mod ident;
mod utils;

// Source rendering
pub use builder::CodeBuilder;
// File operations
pub use file::{GeneratedFile, WriteResult};
// Identifier rules
pub use ident::{KEYWORDS, is_identifier, is_keyword, validate_identifier};
// String utilities
pub use utils::to_snake_case;

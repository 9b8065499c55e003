//! `tandem.toml` parsing and validation.
//!
//! The manifest describes the ordered stage chain, where declaration sources
//! live, and how the pipeline carries declarations between stages.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Manifest, PipelineConfig, SourcesConfig, StageConfig, TandemToml, parse_manifest,
};

/// Default manifest filename.
pub const MANIFEST_FILE: &str = "tandem.toml";

//! Manifest sections.

use std::path::PathBuf;

use serde::Deserialize;
use tandem_ir::{Carry, Refeed, StageSpec};

/// `[pipeline]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Display name used in reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// What each stage hands to the next one.
    #[serde(default)]
    pub carry: Carry,

    /// How generated units become declarations again.
    #[serde(default)]
    pub refeed: Refeed,

    /// Stamp each non-terminal stage's output with the next stage's marker.
    #[serde(default = "default_true")]
    pub chain: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            carry: Carry::default(),
            refeed: Refeed::default(),
            chain: true,
        }
    }
}

fn default_name() -> String {
    "tandem".to_string()
}

fn default_true() -> bool {
    true
}

/// `[sources]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Directories searched recursively for `.tdl` files, relative to the manifest.
    #[serde(default = "default_dirs")]
    pub dirs: Vec<PathBuf>,

    /// Output directory for generated units, relative to the manifest.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dirs: default_dirs(),
            output: default_output(),
        }
    }
}

fn default_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

/// One `[[stages]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageConfig {
    /// Fully qualified marker path, e.g. `Gen.GenerateA`.
    pub marker: String,

    /// Appended to candidate names.
    pub suffix: String,

    /// Value of the generated property.
    pub constant: i64,

    /// Generated property name; defaults to the suffix.
    pub property: Option<String>,
}

impl StageConfig {
    pub fn to_spec(&self) -> StageSpec {
        let spec = StageSpec::new(self.marker.as_str(), self.suffix.clone(), self.constant);
        match &self.property {
            Some(property) => spec.with_property(property.clone()),
            None => spec,
        }
    }
}

//! Manifest types and parsing for tandem.toml files.

mod config;
mod file;
mod parse;
mod validate;

pub use config::{PipelineConfig, SourcesConfig, StageConfig};
pub use file::TandemToml;
pub use parse::parse_manifest;
use serde::Deserialize;
use tandem_ir::{Marker, MarkerRegistry, StageSpec};

/// Root manifest for tandem.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Pipeline behaviour
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Where declaration sources live and where output goes
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Ordered stage chain
    #[serde(default)]
    pub stages: Vec<StageConfig>,
}

impl Manifest {
    /// Build the IR stage chain in manifest order.
    pub fn stage_specs(&self) -> Vec<StageSpec> {
        self.stages.iter().map(StageConfig::to_spec).collect()
    }

    /// Every stage marker, for resolving short marker references in sources.
    pub fn registry(&self) -> MarkerRegistry {
        self.stages
            .iter()
            .map(|stage| Marker::new(stage.marker.as_str()))
            .collect()
    }

    /// Find the stage selecting a marker.
    pub fn stage_for(&self, marker: &Marker) -> Option<&StageConfig> {
        self.stages.iter().find(|s| s.marker == marker.as_str())
    }
}

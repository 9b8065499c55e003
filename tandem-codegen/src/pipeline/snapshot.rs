//! Snapshot plugin for `--visualize`.
//!
//! Captures the pipeline state after each phase so a run can be inspected
//! stage by stage.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::{Result, WrapErr};
use serde::Serialize;
use tandem_ir::GeneratedUnit;

use super::{Diagnostic, PipelineContext, Plugin};

/// The pipeline state right after a phase completed.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    pub completed_stages: usize,
    /// Qualified names in the working set the next stage will scan.
    pub declarations: Vec<String>,
    /// Units emitted so far.
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn capture(phase: &str, ctx: &PipelineContext) -> Self {
        Self {
            phase: phase.to_string(),
            completed_stages: ctx.completed_stages,
            declarations: ctx.declarations.iter().map(|d| d.name.to_string()).collect(),
            units: ctx.units.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    fn write(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
        let path = dir.join(format!("{}.json", self.phase));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}

/// A plugin that captures a [`PhaseSnapshot`] after each phase.
///
/// With an output directory configured, each snapshot is also written as
/// `<dir>/<phase>.json` as soon as it is taken.
#[derive(Debug, Default)]
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::default(),
            output_dir: Some(output_dir.into()),
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut PipelineContext) -> Result<()> {
        let snapshot = PhaseSnapshot::capture(phase, ctx);
        if let Some(dir) = &self.output_dir {
            snapshot.write(dir)?;
        }
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

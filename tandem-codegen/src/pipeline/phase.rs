//! Pipeline phase trait.

use eyre::Result;

use super::PipelineContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseInfo {
    pub name: String,
    pub description: &'static str,
}

/// A phase in the pipeline.
///
/// Built-in phases, in order:
/// - `ValidatePhase` - runs lints over the stages and the input
/// - `StagePhase` - one per stage, scans and emits
///
/// Custom phases run after the last stage.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics, plugin hooks, and snapshot files).
    fn name(&self) -> &str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the pipeline context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut PipelineContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name().to_string(),
            description: self.description(),
        }
    }
}

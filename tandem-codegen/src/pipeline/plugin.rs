//! Pipeline plugin trait.

use eyre::Result;

use super::PipelineContext;

/// A plugin that hooks into the pipeline.
///
/// Plugins are called before and after every phase, stage phases included,
/// and may inspect or modify the context. Returning an error aborts the run.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut PipelineContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut PipelineContext) -> Result<()> {
        Ok(())
    }
}

//! Pipeline orchestrator.

use eyre::Result;
use tandem_ir::{Carry, Declaration, Refeed, StageSpec};
use tandem_manifest::Manifest;
use tracing::{debug, info, info_span};

use super::{
    Diagnostic, Phase, PhaseInfo, PipelineContext, PipelineOutput, Plugin,
    phases::{Lint, LintInfo, LintInput, StagePhase, ValidatePhase},
};
use crate::{Emitter, TdlTemplate, Template};

/// The pipeline driver.
///
/// Runs the validate phase, then one stage phase per configured stage, then
/// any custom phases, calling plugin hooks around each phase. Any failure
/// aborts the run and no partial output is returned.
///
/// # Example
///
/// ```
/// use tandem_codegen::Pipeline;
/// use tandem_ir::{Declaration, StageSpec};
///
/// let output = Pipeline::new(vec![
///     StageSpec::new("Gen.GenerateA", "A", 1),
///     StageSpec::new("Gen.GenerateB", "B", 2),
/// ])
/// .run(vec![Declaration::synthetic("Demo.User", ["Gen.GenerateA"])])?;
///
/// let names: Vec<String> = output.units.iter().map(|u| u.name.to_string()).collect();
/// assert_eq!(names, ["Demo.UserA", "Demo.UserAB"]);
/// # Ok::<(), eyre::Report>(())
/// ```
pub struct Pipeline {
    stages: Vec<StageSpec>,
    carry: Carry,
    refeed: Refeed,
    chain: bool,
    template: Box<dyn Template>,
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline over `stages` with the default policies and lints.
    pub fn new(stages: Vec<StageSpec>) -> Self {
        Self {
            stages,
            carry: Carry::default(),
            refeed: Refeed::default(),
            chain: true,
            template: Box::new(TdlTemplate),
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Create a pipeline configured by a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(manifest.stage_specs())
            .carry(manifest.pipeline.carry)
            .refeed(manifest.pipeline.refeed)
            .chain(manifest.pipeline.chain)
    }

    pub fn carry(mut self, carry: Carry) -> Self {
        self.carry = carry;
        self
    }

    pub fn refeed(mut self, refeed: Refeed) -> Self {
        self.refeed = refeed;
        self
    }

    /// Whether non-terminal stages stamp the next stage's marker on their output.
    pub fn chain(mut self, chain: bool) -> Self {
        self.chain = chain;
        self
    }

    /// Replace the template used to name and render units.
    pub fn template(mut self, template: impl Template + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    /// Replace the validate phase, e.g. with a custom lint set.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a lint to the validate phase.
    pub fn lint(mut self, lint: impl Lint + 'static) -> Self {
        self.validate = self.validate.with_lint(lint);
        self
    }

    /// Add a phase to run after the last stage.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn stages(&self) -> &[StageSpec] {
        &self.stages
    }

    /// The phases a run executes, in order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        let emitter = Emitter::new(self.template.as_ref());
        let mut info = vec![self.validate.info()];
        info.extend(
            self.stages
                .iter()
                .enumerate()
                .map(|(index, stage)| StagePhase::new(index, stage, emitter).info()),
        );
        info.extend(self.phases.iter().map(|phase| phase.info()));
        info
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.validate.lint_info()
    }

    /// Run only the lints over `declarations`, returning every diagnostic.
    pub fn check(&self, declarations: &[Declaration]) -> Vec<Diagnostic> {
        self.validate.check(&LintInput {
            stages: &self.stages,
            declarations,
            chain: self.chain,
        })
    }

    /// Run every phase over the initial `declarations`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation finds errors, a stage fails, or a
    /// plugin aborts. Stage failures downcast to [`crate::StageError`].
    pub fn run(&self, declarations: Vec<Declaration>) -> Result<PipelineOutput> {
        let _span = info_span!("pipeline", stages = self.stages.len()).entered();

        let mut ctx = PipelineContext::new(
            self.stages.clone(),
            declarations,
            self.carry,
            self.refeed,
            self.chain,
        );

        let emitter = Emitter::new(self.template.as_ref());
        let stage_phases: Vec<StagePhase<'_>> = self
            .stages
            .iter()
            .enumerate()
            .map(|(index, stage)| StagePhase::new(index, stage, emitter))
            .collect();

        let mut phases: Vec<&dyn Phase> = Vec::with_capacity(1 + stage_phases.len());
        phases.push(&self.validate);
        for phase in &stage_phases {
            phases.push(phase);
        }
        for phase in &self.phases {
            phases.push(phase.as_ref());
        }

        for phase in phases {
            self.run_phase(phase, &mut ctx)?;
        }

        info!(
            units = ctx.units.len(),
            diagnostics = ctx.diagnostics.len(),
            "pipeline complete"
        );

        Ok(PipelineOutput {
            units: ctx.units,
            diagnostics: ctx.diagnostics,
            declarations: ctx.declarations,
        })
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut PipelineContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

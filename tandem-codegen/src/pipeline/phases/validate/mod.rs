//! Validate phase - runs lints before any stage.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::{Lint, LintInfo, LintInput};
pub use lints::{DuplicateSuffixLint, SuffixIdentifierLint, UnusedMarkerLint};

use crate::{
    StageError,
    pipeline::{Diagnostic, Phase, PipelineContext},
};

/// Phase that validates the stage list using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(SuffixIdentifierLint),
                Box::new(DuplicateSuffixLint),
                Box::new(UnusedMarkerLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint and return what they found, without failing.
    pub fn check(&self, input: &LintInput<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(input, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check stage suffixes and markers and collect diagnostics"
    }

    fn run(&self, ctx: &mut PipelineContext) -> Result<()> {
        let diagnostics = self.check(&LintInput {
            stages: &ctx.stages,
            declarations: &ctx.declarations,
            chain: ctx.chain,
        });
        ctx.diagnostics.extend(diagnostics);

        // Warnings are allowed
        if ctx.has_errors() {
            return Err(StageError::ValidationFailed {
                count: ctx.error_count(),
            }
            .into());
        }

        Ok(())
    }
}

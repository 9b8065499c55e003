//! State carried through pipeline phases.

use tandem_ir::{Carry, Declaration, GeneratedUnit, Marker, Refeed, StageSpec};

use super::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// Each stage phase reads the working set, appends its units, and replaces
/// the working set according to the carry policy.
#[derive(Debug)]
pub struct PipelineContext {
    pub stages: Vec<StageSpec>,
    pub carry: Carry,
    pub refeed: Refeed,
    /// Whether non-terminal stages stamp the next stage's marker on their output.
    pub chain: bool,
    /// Declarations the next stage scans.
    pub declarations: Vec<Declaration>,
    /// Units emitted so far, in stage order.
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of stages that have finished.
    pub completed_stages: usize,
}

impl PipelineContext {
    pub fn new(
        stages: Vec<StageSpec>,
        declarations: Vec<Declaration>,
        carry: Carry,
        refeed: Refeed,
        chain: bool,
    ) -> Self {
        Self {
            stages,
            carry,
            refeed,
            chain,
            declarations,
            units: Vec::new(),
            diagnostics: Vec::new(),
            completed_stages: 0,
        }
    }

    /// The marker stage `index` stamps on its output, if any.
    pub fn chain_marker(&self, index: usize) -> Option<&Marker> {
        if !self.chain {
            return None;
        }
        self.stages.get(index + 1).map(|stage| &stage.marker)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{demo_declarations, demo_stages};

    fn context(chain: bool) -> PipelineContext {
        PipelineContext::new(
            demo_stages(),
            demo_declarations(),
            Carry::All,
            Refeed::InMemory,
            chain,
        )
    }

    #[test]
    fn test_chain_marker() {
        let ctx = context(true);
        assert_eq!(ctx.chain_marker(0), Some(&Marker::new("Gen.GenerateB")));
        assert_eq!(ctx.chain_marker(1), None);

        let ctx = context(false);
        assert_eq!(ctx.chain_marker(0), None);
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = context(true);

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "just info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}

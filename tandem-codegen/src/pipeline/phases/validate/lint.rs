//! Lint trait for pipeline validation.

use tandem_ir::{Declaration, StageSpec};

use crate::pipeline::Diagnostic;

/// What a lint gets to look at: the stage list and the initial input.
#[derive(Debug, Clone, Copy)]
pub struct LintInput<'a> {
    pub stages: &'a [StageSpec],
    pub declarations: &'a [Declaration],
    /// Whether stages chain into their successors.
    pub chain: bool,
}

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the pipeline configuration for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the input and add any diagnostics.
    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

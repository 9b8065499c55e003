//! Lint for stages nothing can reach.

use super::super::{Lint, LintInput};
use crate::pipeline::Diagnostic;

/// Lint that warns when a stage's marker never appears on the input and no
/// earlier stage chains into it.
pub struct UnusedMarkerLint;

impl Lint for UnusedMarkerLint {
    fn name(&self) -> &'static str {
        "unused-marker"
    }

    fn description(&self) -> &'static str {
        "Warn about stages whose marker nothing carries"
    }

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (index, stage) in input.stages.iter().enumerate() {
            let chained = input.chain && index > 0;
            let marked = input
                .declarations
                .iter()
                .any(|decl| decl.markers.contains(&stage.marker));

            if !chained && !marked {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "no declaration carries '@{}', stage {} will emit nothing",
                            stage.marker, index
                        ),
                    )
                    .at(format!("stages[{}].marker", index)),
                );
            }
        }
    }
}

//! Lint for duplicate stage suffixes.

use std::collections::HashMap;

use super::super::{Lint, LintInput};
use crate::pipeline::Diagnostic;

/// Lint that errors when two stages share a suffix.
///
/// Suffixes are compared as they appear in hint names, so `A` and `a` clash.
pub struct DuplicateSuffixLint;

impl Lint for DuplicateSuffixLint {
    fn name(&self) -> &'static str {
        "duplicate-suffix"
    }

    fn description(&self) -> &'static str {
        "Detect stages that share a suffix"
    }

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, stage) in input.stages.iter().enumerate() {
            if let Some(&first) = seen.get(&stage.hint_segment()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "stage {} suffix '{}' clashes with '{}' (first used by stage {})",
                            index, stage.suffix, input.stages[first].suffix, first
                        ),
                    )
                    .at(format!("stages[{}].suffix", index)),
                );
            } else {
                seen.insert(stage.hint_segment(), index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tandem_ir::StageSpec;

    use super::*;

    #[test]
    fn test_duplicate_suffix() {
        let stages = [
            StageSpec::new("Gen.GenerateA", "A", 1),
            StageSpec::new("Gen.GenerateB", "B", 2),
            StageSpec::new("Gen.GenerateC", "A", 3),
        ];
        let input = LintInput {
            stages: &stages,
            declarations: &[],
            chain: true,
        };

        let mut diagnostics = Vec::new();
        DuplicateSuffixLint.check(&input, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("first used by stage 0"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("stages[2].suffix"));
    }

    #[test]
    fn test_suffixes_differing_in_case_clash() {
        let stages = [
            StageSpec::new("Gen.GenerateA", "AB", 1),
            StageSpec::new("Gen.GenerateB", "Ab", 2),
        ];
        let input = LintInput {
            stages: &stages,
            declarations: &[],
            chain: true,
        };

        let mut diagnostics = Vec::new();
        DuplicateSuffixLint.check(&input, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "stage 1 suffix 'Ab' clashes with 'AB' (first used by stage 0)"
        );
    }
}

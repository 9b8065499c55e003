//! Lint for suffix and property naming.

use tandem_core::validate_identifier;

use super::super::{Lint, LintInput};
use crate::pipeline::Diagnostic;

/// Lint that errors when a stage would generate an invalid name.
///
/// A suffix is appended to an identifier, so it may start with a digit but
/// must otherwise be letters, digits, and underscores. The property name
/// (the suffix unless overridden) must be a full identifier.
pub struct SuffixIdentifierLint;

impl Lint for SuffixIdentifierLint {
    fn name(&self) -> &'static str {
        "suffix-identifier"
    }

    fn description(&self) -> &'static str {
        "Check that stage suffixes and property names form valid identifiers"
    }

    fn check(&self, input: &LintInput<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (index, stage) in input.stages.iter().enumerate() {
            if !is_suffix(&stage.suffix) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "suffix '{}' of stage {} must be letters, numbers, and underscores",
                            stage.suffix, index
                        ),
                    )
                    .at(format!("stages[{}].suffix", index)),
                );
                continue;
            }

            if let Some(reason) = validate_identifier(stage.property_name()) {
                let field = if stage.property.is_some() {
                    "property"
                } else {
                    "suffix"
                };
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "property '{}' of stage {} is not a valid identifier: {}",
                            stage.property_name(),
                            index,
                            reason
                        ),
                    )
                    .at(format!("stages[{}].{}", index, field)),
                );
            }
        }
    }
}

fn is_suffix(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

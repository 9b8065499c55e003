//! Stage phase - one scan-and-emit pass.

use std::collections::{HashMap, HashSet};

use eyre::Result;
use tandem_core::to_snake_case;
use tandem_ir::{Carry, StageSpec};
use tracing::info;

use crate::{
    Emitter, StageError, run_stage,
    pipeline::{Diagnostic, Phase, PipelineContext},
    scan::unresolved,
};

/// Phase that runs stage `index` and replaces the working set.
///
/// Under [`Carry::Generated`] the next working set is only this stage's
/// output; under [`Carry::All`] the output is appended to the current set.
/// Hint names must stay unique across the whole run.
pub struct StagePhase<'t> {
    index: usize,
    name: String,
    emitter: Emitter<'t>,
}

impl<'t> StagePhase<'t> {
    pub fn new(index: usize, stage: &StageSpec, emitter: Emitter<'t>) -> Self {
        Self {
            index,
            name: format!("stage-{}-{}", index, to_snake_case(&stage.suffix)),
            emitter,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Phase for StagePhase<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &'static str {
        "Scan the working set and emit one unit per marked declaration"
    }

    fn run(&self, ctx: &mut PipelineContext) -> Result<()> {
        let Some(stage) = ctx.stages.get(self.index).cloned() else {
            eyre::bail!("pipeline has no stage {}", self.index);
        };
        let chain = ctx.chain_marker(self.index).cloned();

        let output = run_stage(
            &ctx.declarations,
            self.index,
            &stage,
            chain.as_ref(),
            &self.emitter,
            ctx.refeed,
        )?;

        let emitted: HashMap<&str, _> = ctx
            .units
            .iter()
            .map(|unit| (unit.hint_name.as_str(), &unit.from))
            .collect();
        for unit in &output.units {
            if let Some(first) = emitted.get(unit.hint_name.as_str()) {
                return Err(StageError::DuplicateHintName {
                    hint: unit.hint_name.clone(),
                    first: (*first).clone(),
                    second: unit.from.clone(),
                }
                .into());
            }
        }

        // Carried declarations are seen again by later stages; report each once.
        let skipped: Vec<Diagnostic> = unresolved(&ctx.declarations)
            .map(|(decl, reason)| (decl.name.to_string(), format!("skipped: {}", reason)))
            .filter(|(location, message)| {
                !ctx.diagnostics
                    .iter()
                    .any(|d| d.location.as_deref() == Some(location.as_str()) && &d.message == message)
            })
            .map(|(location, message)| Diagnostic::info(&self.name, message).at(location))
            .collect();
        ctx.diagnostics.extend(skipped);

        if ctx.carry == Carry::All {
            let existing: HashSet<_> = ctx.declarations.iter().map(|d| &d.name).collect();
            let shadowed: Vec<Diagnostic> = output
                .declarations
                .iter()
                .filter(|decl| existing.contains(&decl.name))
                .map(|decl| {
                    Diagnostic::warning(
                        &self.name,
                        format!("generated '{}' has the same name as an existing declaration", decl.name),
                    )
                    .at(decl.name.to_string())
                })
                .collect();
            ctx.diagnostics.extend(shadowed);
        }

        info!(
            stage = %stage,
            units = output.units.len(),
            skipped = output.skipped,
            "stage complete"
        );

        ctx.units.extend(output.units);
        match ctx.carry {
            Carry::Generated => ctx.declarations = output.declarations,
            Carry::All => ctx.declarations.extend(output.declarations),
        }
        ctx.completed_stages += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tandem_ir::{Declaration, MarkerSet, Origin, QualifiedName, Refeed};

    use super::*;
    use crate::testing::{demo_declarations, demo_stages, names};

    fn context(carry: Carry) -> PipelineContext {
        PipelineContext::new(
            demo_stages(),
            demo_declarations(),
            carry,
            Refeed::InMemory,
            true,
        )
    }

    #[test]
    fn test_stage_phase_name() {
        let stages = demo_stages();
        let phase = StagePhase::new(1, &stages[1], Emitter::default());
        assert_eq!(phase.name(), "stage-1-b");
        assert_eq!(phase.index(), 1);
    }

    #[test]
    fn test_carry_all_appends() {
        let mut ctx = context(Carry::All);
        let phase = StagePhase::new(0, &ctx.stages[0].clone(), Emitter::default());

        phase.run(&mut ctx).unwrap();

        assert_eq!(ctx.completed_stages, 1);
        assert_eq!(ctx.declarations.len(), 6);
        assert_eq!(ctx.declarations[4].name.to_string(), "Demo.UserModelAA");
        assert_eq!(names(&ctx.units), vec!["Demo.UserModelAA", "Demo.UserModelABA"]);
    }

    #[test]
    fn test_carry_generated_replaces() {
        let mut ctx = context(Carry::Generated);
        let phase = StagePhase::new(0, &ctx.stages[0].clone(), Emitter::default());

        phase.run(&mut ctx).unwrap();

        assert_eq!(ctx.declarations.len(), 2);
        assert!(ctx.declarations.iter().all(Declaration::is_generated));
    }

    #[test]
    fn test_unresolved_reported_as_info() {
        let mut ctx = context(Carry::All);
        ctx.declarations.push(Declaration::new(
            QualifiedName::new("Demo", "Odd"),
            MarkerSet::unresolved("marker '@GenerateB' is ambiguous between Alt.GenerateB and Gen.GenerateB"),
            Origin::Synthetic,
        ));
        let phase = StagePhase::new(0, &ctx.stages[0].clone(), Emitter::default());

        phase.run(&mut ctx).unwrap();

        assert_eq!(ctx.diagnostics.len(), 1);
        let diag = &ctx.diagnostics[0];
        assert_eq!(diag.severity, crate::pipeline::Severity::Info);
        assert_eq!(diag.location.as_deref(), Some("Demo.Odd"));
        assert!(diag.message.contains("ambiguous"));
    }

    #[test]
    fn test_unresolved_reported_once_across_stages() {
        let mut ctx = context(Carry::All);
        ctx.declarations.push(Declaration::new(
            QualifiedName::new("Demo", "Odd"),
            MarkerSet::unresolved("marker '@GenerateB' is ambiguous between Alt.GenerateB and Gen.GenerateB"),
            Origin::Synthetic,
        ));
        let stages = ctx.stages.clone();

        StagePhase::new(0, &stages[0], Emitter::default()).run(&mut ctx).unwrap();
        StagePhase::new(1, &stages[1], Emitter::default()).run(&mut ctx).unwrap();

        let infos: Vec<_> = ctx
            .diagnostics
            .iter()
            .filter(|d| d.location.as_deref() == Some("Demo.Odd"))
            .collect();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].phase, "stage-0-a");
    }

    #[test]
    fn test_hint_reused_by_later_stage_fails() {
        struct CandidateHints;
        impl crate::Template for CandidateHints {
            fn name(&self) -> &'static str {
                "candidate-hints"
            }
            fn hint_name(&self, candidate: &tandem_ir::Candidate<'_>, _stage: &StageSpec) -> String {
                candidate.name().to_string()
            }
            fn render(&self, unit: &crate::UnitSpec<'_>) -> String {
                format!("type {} {{}}\n", unit.name.name)
            }
        }

        let mut ctx = context(Carry::All);
        ctx.declarations
            .push(Declaration::synthetic("Demo.Both", ["Gen.GenerateA", "Gen.GenerateB"]));
        let stages = ctx.stages.clone();
        let emitter = Emitter::new(&CandidateHints);

        StagePhase::new(0, &stages[0], emitter).run(&mut ctx).unwrap();
        let err = StagePhase::new(1, &stages[1], emitter)
            .run(&mut ctx)
            .unwrap_err();

        match err.downcast_ref::<StageError>() {
            Some(StageError::DuplicateHintName {
                hint,
                first,
                second,
            }) => {
                assert_eq!(hint, "Demo.Both");
                assert_eq!(first.to_string(), "Demo.Both");
                assert_eq!(second.to_string(), "Demo.Both");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ctx.completed_stages, 1);
    }

    #[test]
    fn test_shadowing_warns_under_carry_all() {
        let mut ctx = context(Carry::All);
        ctx.declarations.push(Declaration::synthetic("Demo.UserModelAA", []));
        let phase = StagePhase::new(0, &ctx.stages[0].clone(), Emitter::default());

        phase.run(&mut ctx).unwrap();

        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}

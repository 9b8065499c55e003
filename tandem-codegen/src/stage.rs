//! Stage Coordinator.

use indexmap::IndexMap;
use tandem_ir::{
    Declaration, GeneratedUnit, Marker, MarkerRegistry, MarkerSet, Origin, QualifiedName, Refeed,
    StageSpec,
};
use tracing::{debug, info_span};

use crate::{Emitter, StageError, scan, scan::unresolved};

/// Result of one stage.
#[derive(Debug, Clone, Default)]
pub struct StageOutput {
    /// Units in candidate order.
    pub units: Vec<GeneratedUnit>,
    /// Declarations rebuilt from `units`, ready for the next stage.
    pub declarations: Vec<Declaration>,
    /// Declarations skipped because their markers could not be resolved.
    pub skipped: usize,
}

/// Run one stage over `declarations`.
///
/// Every declaration carrying `stage.marker` yields one unit. When `chain` is
/// set, the units carry that marker. `index` is the stage's position in the
/// pipeline and only appears in errors and logs.
///
/// # Errors
///
/// Fails when two candidates produce the same generated name or hint name,
/// or when `refeed` is [`Refeed::Reparse`] and a unit's text does not parse.
pub fn run_stage(
    declarations: &[Declaration],
    index: usize,
    stage: &StageSpec,
    chain: Option<&Marker>,
    emitter: &Emitter<'_>,
    refeed: Refeed,
) -> Result<StageOutput, StageError> {
    let _span = info_span!("stage", index, suffix = %stage.suffix, marker = %stage.marker).entered();

    let skipped = unresolved(declarations)
        .inspect(|(decl, reason)| debug!(declaration = %decl.name, reason, "skipping unresolved"))
        .count();

    let candidates = scan(declarations, &stage.marker);
    debug!(candidates = candidates.len(), skipped, "scanned");

    let mut seen: IndexMap<QualifiedName, QualifiedName> = IndexMap::new();
    let mut hints: IndexMap<String, QualifiedName> = IndexMap::new();
    let mut units = Vec::with_capacity(candidates.len());

    for candidate in &candidates {
        let unit = emitter.emit(candidate, stage, chain);
        debug!(from = %unit.from, generated = %unit.name, hint = %unit.hint_name, "emitted");

        if let Some(first) = seen.get(&unit.name) {
            return Err(StageError::DuplicateGeneratedName {
                stage: stage.suffix.clone(),
                generated: unit.name,
                first: first.clone(),
                second: unit.from,
            });
        }
        if let Some(first) = hints.get(&unit.hint_name) {
            return Err(StageError::DuplicateHintName {
                hint: unit.hint_name,
                first: first.clone(),
                second: unit.from,
            });
        }
        seen.insert(unit.name.clone(), unit.from.clone());
        hints.insert(unit.hint_name.clone(), unit.from.clone());
        units.push(unit);
    }

    let declarations = match refeed {
        Refeed::InMemory => units.iter().map(in_memory).collect(),
        Refeed::Reparse => reparse(&units, index, chain)?,
    };

    Ok(StageOutput {
        units,
        declarations,
        skipped,
    })
}

fn origin(unit: &GeneratedUnit) -> Origin {
    Origin::Generated {
        stage: unit.stage.clone(),
        from: unit.from.clone(),
    }
}

fn in_memory(unit: &GeneratedUnit) -> Declaration {
    let markers = match &unit.chained {
        Some(marker) => MarkerSet::from_iter([marker.clone()]),
        None => MarkerSet::empty(),
    };
    Declaration::new(unit.name.clone(), markers, origin(unit))
}

fn reparse(
    units: &[GeneratedUnit],
    index: usize,
    chain: Option<&Marker>,
) -> Result<Vec<Declaration>, StageError> {
    let registry: MarkerRegistry = chain.cloned().into_iter().collect();
    let mut declarations = Vec::with_capacity(units.len());

    for unit in units {
        let filename = format!("{}.{}", unit.hint_name, tandem_syntax::SOURCE_EXTENSION);
        let file = tandem_syntax::parse(&unit.text, &filename).map_err(|source| {
            StageError::InvalidSyntheticSource {
                stage_index: index,
                hint: unit.hint_name.clone(),
                text: unit.text.clone(),
                source,
            }
        })?;
        declarations.extend(tandem_syntax::lower(&file, &registry, &origin(unit)));
    }

    Ok(declarations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Template, UnitSpec,
        testing::{demo_declarations, demo_stages, names},
    };

    #[test]
    fn test_stage_emits_in_candidate_order() {
        let decls = demo_declarations();
        let stages = demo_stages();

        let output = run_stage(
            &decls,
            0,
            &stages[0],
            Some(&stages[1].marker),
            &Emitter::default(),
            Refeed::InMemory,
        )
        .unwrap();

        assert_eq!(
            names(&output.units),
            vec!["Demo.UserModelAA", "Demo.UserModelABA"]
        );
        assert_eq!(output.declarations.len(), 2);
        assert!(output.declarations.iter().all(Declaration::is_generated));
        assert!(
            output
                .declarations
                .iter()
                .all(|d| d.markers.contains(&stages[1].marker))
        );
    }

    #[test]
    fn test_terminal_stage_leaves_output_unmarked() {
        let decls = demo_declarations();
        let stages = demo_stages();

        let output = run_stage(
            &decls,
            0,
            &stages[0],
            None,
            &Emitter::default(),
            Refeed::InMemory,
        )
        .unwrap();

        assert!(output.units.iter().all(|u| u.chained.is_none()));
        assert!(
            output
                .declarations
                .iter()
                .all(|d| d.markers.iter().next().is_none())
        );
    }

    #[test]
    fn test_stage_without_matches() {
        let decls = vec![Declaration::synthetic("Demo.Plain", [])];
        let stages = demo_stages();

        let output = run_stage(
            &decls,
            0,
            &stages[0],
            None,
            &Emitter::default(),
            Refeed::InMemory,
        )
        .unwrap();

        assert!(output.units.is_empty());
        assert!(output.declarations.is_empty());
    }

    #[test]
    fn test_duplicate_generated_name() {
        struct FixedName;
        impl Template for FixedName {
            fn name(&self) -> &'static str {
                "fixed"
            }
            fn generated_name(
                &self,
                candidate: &tandem_ir::Candidate<'_>,
                _stage: &StageSpec,
            ) -> QualifiedName {
                candidate.name().with_name("Collision")
            }
            fn render(&self, _unit: &UnitSpec<'_>) -> String {
                String::new()
            }
        }

        let decls = vec![
            Declaration::synthetic("Demo.UserA", ["Gen.GenerateB"]),
            Declaration::synthetic("Demo.User", ["Gen.GenerateB"]),
        ];
        let stage = StageSpec::new("Gen.GenerateB", "B", 2);

        let err = run_stage(
            &decls,
            1,
            &stage,
            None,
            &Emitter::new(&FixedName),
            Refeed::InMemory,
        )
        .unwrap_err();

        match err {
            StageError::DuplicateGeneratedName {
                stage,
                generated,
                first,
                second,
            } => {
                assert_eq!(stage, "B");
                assert_eq!(generated.to_string(), "Demo.Collision");
                assert_eq!(first.to_string(), "Demo.UserA");
                assert_eq!(second.to_string(), "Demo.User");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_hint_name() {
        struct SimpleHints;
        impl Template for SimpleHints {
            fn name(&self) -> &'static str {
                "simple-hints"
            }
            fn hint_name(&self, candidate: &tandem_ir::Candidate<'_>, _stage: &StageSpec) -> String {
                candidate.name().name.clone()
            }
            fn render(&self, _unit: &UnitSpec<'_>) -> String {
                String::new()
            }
        }

        let decls = vec![
            Declaration::synthetic("N1.X", ["Gen.GenerateA"]),
            Declaration::synthetic("N2.X", ["Gen.GenerateA"]),
        ];
        let stage = StageSpec::new("Gen.GenerateA", "A", 1);

        let err = run_stage(
            &decls,
            0,
            &stage,
            None,
            &Emitter::new(&SimpleHints),
            Refeed::InMemory,
        )
        .unwrap_err();

        match err {
            StageError::DuplicateHintName {
                hint,
                first,
                second,
            } => {
                assert_eq!(hint, "X");
                assert_eq!(first.to_string(), "N1.X");
                assert_eq!(second.to_string(), "N2.X");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reparse_matches_in_memory() {
        let decls = demo_declarations();
        let stages = demo_stages();
        let chain = Some(&stages[1].marker);
        let emitter = Emitter::default();

        let in_memory = run_stage(&decls, 0, &stages[0], chain, &emitter, Refeed::InMemory).unwrap();
        let reparsed = run_stage(&decls, 0, &stages[0], chain, &emitter, Refeed::Reparse).unwrap();

        assert_eq!(in_memory.units, reparsed.units);
        assert_eq!(in_memory.declarations, reparsed.declarations);
    }

    #[test]
    fn test_reparse_rejects_invalid_text() {
        struct Broken;
        impl Template for Broken {
            fn name(&self) -> &'static str {
                "broken"
            }
            fn render(&self, unit: &UnitSpec<'_>) -> String {
                format!("type {} {{ const = }}", unit.name.name)
            }
        }

        let decls = demo_declarations();
        let stages = demo_stages();

        let err = run_stage(
            &decls,
            0,
            &stages[0],
            None,
            &Emitter::new(&Broken),
            Refeed::Reparse,
        )
        .unwrap_err();

        match err {
            StageError::InvalidSyntheticSource {
                stage_index,
                hint,
                text,
                ..
            } => {
                assert_eq!(stage_index, 0);
                assert_eq!(hint, "Demo.UserModelA.a.g");
                assert!(text.contains("const ="));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_declarations_are_counted() {
        let mut decls = demo_declarations();
        decls.push(Declaration::new(
            QualifiedName::new("Demo", "Ambiguous"),
            MarkerSet::unresolved("marker '@GenerateA' is ambiguous"),
            Origin::Synthetic,
        ));
        let stages = demo_stages();

        let output = run_stage(
            &decls,
            0,
            &stages[0],
            None,
            &Emitter::default(),
            Refeed::InMemory,
        )
        .unwrap();

        assert_eq!(output.skipped, 1);
        assert_eq!(output.units.len(), 2);
    }
}

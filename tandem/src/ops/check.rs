//! Check operation - lint the stage chain against the loaded sources.

use std::path::Path;

use tandem_codegen::{
    Pipeline,
    pipeline::{Diagnostic, Severity},
    scan::unresolved,
};
use tandem_ir::Declaration;
use tandem_manifest::Manifest;

use crate::reports::{CheckReport, DeclarationInfo};

/// Execute the check operation.
///
/// Runs the lints without running any stage, and lists which stages would
/// select each declaration.
pub fn check(
    manifest: &Manifest,
    declarations: &[Declaration],
    source_count: usize,
    config_path: &Path,
) -> CheckReport {
    let pipeline = Pipeline::from_manifest(manifest);
    let mut diagnostics = pipeline.check(declarations);
    diagnostics.extend(unresolved(declarations).map(|(decl, reason)| {
        Diagnostic::info("check", format!("never selected: {}", reason)).at(decl.name.to_string())
    }));

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let declarations = declarations
        .iter()
        .map(|decl| DeclarationInfo {
            name: decl.name.to_string(),
            selected_by: pipeline
                .stages()
                .iter()
                .enumerate()
                .filter(|(_, stage)| decl.markers.contains(&stage.marker))
                .map(|(index, stage)| format!("stage {} (*{})", index, stage.suffix))
                .collect(),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        source_count,
        errors,
        warnings,
        infos,
        declarations,
    }
}

#[cfg(test)]
mod tests {
    use tandem_ir::{MarkerSet, Origin, QualifiedName};

    use super::*;

    #[test]
    fn test_check_lists_selections_and_problems() {
        let manifest: Manifest = r#"
            [[stages]]
            marker = "Gen.GenerateA"
            suffix = "A"
            constant = 1

            [[stages]]
            marker = "Gen.GenerateB"
            suffix = "B"
            constant = 2
        "#
        .parse()
        .unwrap();
        let declarations = vec![
            Declaration::synthetic("Demo.Plain", []),
            Declaration::new(
                QualifiedName::new("Demo", "Odd"),
                MarkerSet::unresolved("marker '@GenerateA' is ambiguous between Alt.GenerateA and Gen.GenerateA"),
                Origin::Synthetic,
            ),
            Declaration::synthetic("Demo.Both", ["Gen.GenerateA", "Gen.GenerateB"]),
        ];

        let report = check(&manifest, &declarations, 1, Path::new("tandem.toml"));

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.infos.len(), 1);
        assert!(report.infos[0].contains("--> Demo.Odd"));
        assert!(report.declarations[0].selected_by.is_empty());
        assert_eq!(
            report.declarations[2].selected_by,
            vec!["stage 0 (*A)", "stage 1 (*B)"]
        );
    }
}

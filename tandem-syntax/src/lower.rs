//! Lowering parsed source into IR declarations.

use tandem_ir::{Declaration, MarkerRegistry, MarkerSet, Origin, QualifiedName, Resolution};

use crate::ast::SourceFile;

/// Lower every type in `file` into a declaration, resolving marker references.
///
/// Markers resolve against `registry` using the file's namespace and imports.
/// A reference matching several registered markers through imports leaves
/// the whole marker set unresolved; such a declaration is never selected.
pub fn lower(file: &SourceFile, registry: &MarkerRegistry, origin: &Origin) -> Vec<Declaration> {
    let namespace = file.namespace_str();
    let imports: Vec<String> = file.imports.iter().map(ToString::to_string).collect();

    file.types
        .iter()
        .map(|decl| {
            let mut markers = Vec::with_capacity(decl.markers.len());
            let mut ambiguous = Vec::new();

            for path in &decl.markers {
                let written = path.to_string();
                match registry.resolve(&written, &namespace, &imports) {
                    Resolution::Known(marker) | Resolution::Foreign(marker) => {
                        markers.push(marker)
                    }
                    Resolution::Ambiguous(options) => {
                        let options: Vec<String> = options.iter().map(ToString::to_string).collect();
                        ambiguous.push(format!(
                            "marker '@{}' is ambiguous between {}",
                            written,
                            options.join(" and ")
                        ));
                    }
                }
            }

            let markers = if ambiguous.is_empty() {
                markers.into_iter().collect()
            } else {
                MarkerSet::unresolved(ambiguous.join("; "))
            };

            Declaration::new(
                QualifiedName::new(namespace.clone(), decl.name.text.clone()),
                markers,
                origin.clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tandem_ir::Marker;

    use super::*;
    use crate::parse;

    fn registry() -> MarkerRegistry {
        ["Gen.GenerateA", "Gen.GenerateB", "Alt.GenerateB"]
            .into_iter()
            .map(Marker::from)
            .collect()
    }

    #[test]
    fn test_lower_resolves_imported_markers() {
        let file = parse(
            "use Gen;\nnamespace Demo;\n@GenerateA type UserModel {}\n",
            "demo.tdl",
        )
        .unwrap();

        let decls = lower(&file, &registry(), &Origin::Synthetic);

        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, QualifiedName::new("Demo", "UserModel"));
        assert!(decls[0].markers.contains(&Marker::new("Gen.GenerateA")));
    }

    #[test]
    fn test_lower_keeps_foreign_markers() {
        let file = parse("@Serializable type Dto {}", "dto.tdl").unwrap();

        let decls = lower(&file, &registry(), &Origin::Synthetic);

        assert!(decls[0].markers.contains(&Marker::new("Serializable")));
        assert!(!decls[0].markers.contains(&Marker::new("Gen.GenerateA")));
    }

    #[test]
    fn test_lower_unimported_short_marker_does_not_match() {
        let file = parse("namespace Demo;\n@GenerateA type UserModel {}", "demo.tdl").unwrap();

        let decls = lower(&file, &registry(), &Origin::Synthetic);

        assert!(decls[0].markers.is_resolved());
        assert!(!decls[0].markers.contains(&Marker::new("Gen.GenerateA")));
    }

    #[test]
    fn test_lower_ambiguous_marker_is_unresolved() {
        let file = parse(
            "use Gen;\nuse Alt;\n@GenerateA @GenerateB type UserModel {}",
            "demo.tdl",
        )
        .unwrap();

        let decls = lower(&file, &registry(), &Origin::Synthetic);

        match &decls[0].markers {
            MarkerSet::Unresolved { reason } => {
                assert!(reason.contains("'@GenerateB'"));
                assert!(reason.contains("Alt.GenerateB and Gen.GenerateB"));
            }
            other => panic!("expected unresolved markers, got {other:?}"),
        }
        assert!(!decls[0].markers.contains(&Marker::new("Gen.GenerateA")));
    }

    #[test]
    fn test_lower_records_origin() {
        let file = parse("type A {}\ntype B {}", "ab.tdl").unwrap();
        let origin = Origin::Source {
            path: "ab.tdl".into(),
        };

        let decls = lower(&file, &registry(), &origin);

        assert_eq!(decls.len(), 2);
        assert!(decls.iter().all(|d| d.origin == origin));
        assert_eq!(decls[1].name.to_string(), "B");
    }
}

//! File-level parsing tests.

use std::fs;

use tandem_ir::{Marker, MarkerRegistry, Origin};
use tandem_syntax::{Error, lower, parse_file};
use tempfile::TempDir;

#[test]
fn test_parse_file_and_lower() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("models.tdl");
    fs::write(
        &path,
        "use Gen;\nnamespace Demo;\n\n@GenerateA\ntype UserModelA {}\n\n@GenerateB\ntype UserModelB {}\n",
    )
    .unwrap();

    let file = parse_file(&path).unwrap();
    let registry: MarkerRegistry = [Marker::new("Gen.GenerateA"), Marker::new("Gen.GenerateB")]
        .into_iter()
        .collect();
    let decls = lower(&file, &registry, &Origin::Source { path: path.clone() });

    let names: Vec<String> = decls.iter().map(|d| d.name.to_string()).collect();
    assert_eq!(names, vec!["Demo.UserModelA", "Demo.UserModelB"]);
    assert!(decls[0].markers.contains(&Marker::new("Gen.GenerateA")));
    assert!(decls[1].markers.contains(&Marker::new("Gen.GenerateB")));
}

#[test]
fn test_parse_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = parse_file(temp.path().join("missing.tdl")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_parse_error_reports_filename() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.tdl");
    fs::write(&path, "type {}").unwrap();

    let err = parse_file(&path).unwrap_err();
    let report = format!("{:?}", miette::Report::new(*err));

    assert!(report.contains("broken.tdl"));
    assert!(report.contains("expected identifier"));
}

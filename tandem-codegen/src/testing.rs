//! Test fixtures shared by the unit tests.

use tandem_ir::{Declaration, GeneratedUnit, StageSpec};

/// `@Gen.GenerateA -> *A (A = 1)` followed by `@Gen.GenerateB -> *B (B = 2)`.
pub fn demo_stages() -> Vec<StageSpec> {
    vec![
        StageSpec::new("Gen.GenerateA", "A", 1),
        StageSpec::new("Gen.GenerateB", "B", 2),
    ]
}

/// The three demo models plus an unmarked type.
pub fn demo_declarations() -> Vec<Declaration> {
    vec![
        Declaration::synthetic("Demo.UserModelA", ["Gen.GenerateA"]),
        Declaration::synthetic("Demo.UserModelB", ["Gen.GenerateB"]),
        Declaration::synthetic("Demo.UserModelAB", ["Gen.GenerateA"]),
        Declaration::synthetic("Demo.Plain", []),
    ]
}

/// Qualified names of `units`, in order.
pub fn names(units: &[GeneratedUnit]) -> Vec<String> {
    units.iter().map(|u| u.name.to_string()).collect()
}

//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the stages and the input
//! - [`StagePhase`] - runs one stage and advances the working set

mod stage;
mod validate;

pub use stage::StagePhase;
pub use validate::{
    DuplicateSuffixLint, Lint, LintInfo, LintInput, SuffixIdentifierLint, UnusedMarkerLint,
    ValidatePhase,
};

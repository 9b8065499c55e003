//! Staged scan-and-emit code generation.
//!
//! A stage selects every declaration carrying its marker, emits one synthetic
//! declaration per match, and hands those declarations to the next stage.
//! Output of stage N can therefore be picked up by stage N+1.
//!
//! # Module Organization
//!
//! - [`scan`] - Declaration Scanner (marker filter)
//! - [`emit`] - Template Emitter ([`Template`], [`TdlTemplate`], [`Emitter`])
//! - [`stage`] - Stage Coordinator ([`run_stage`])
//! - [`pipeline`] - Pipeline Driver with phases, lints, plugins, and snapshots

mod error;
pub mod emit;
pub mod pipeline;
pub mod scan;
pub mod stage;

#[cfg(test)]
mod testing;

pub use emit::{Emitter, TdlTemplate, Template, UnitSpec, emit};
pub use error::StageError;
pub use pipeline::{Pipeline, PipelineOutput};
pub use scan::scan;
pub use stage::{StageOutput, run_stage};

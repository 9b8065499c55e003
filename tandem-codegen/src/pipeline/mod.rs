//! Pipeline Driver.
//!
//! [`Pipeline`] runs the stages in order as a state machine over the stage
//! index. Stage `i` scans the working set, its units are appended to the
//! output, and the working set is rebuilt according to [`Carry`]:
//!
//! ```text
//! validate → stage-0 → stage-1 → … → custom phases
//! ```
//!
//! Plugins receive before/after hooks for every phase, and the
//! [`SnapshotPlugin`] records the state after each one.
//!
//! [`Carry`]: tandem_ir::Carry

mod context;
mod diagnostic;
mod output;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::PipelineContext;
pub use diagnostic::{Diagnostic, Severity};
pub use output::{PipelineOutput, UnitFile};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};

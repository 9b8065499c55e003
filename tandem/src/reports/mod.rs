//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an [`Output`] target.

mod check;
mod explain;
mod generate;
mod output;

pub use check::{CheckReport, DeclarationInfo};
pub use explain::{ExplainReport, LintInfo, PhaseInfo, PipelineInfo, StageInfo};
pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, StageSummary, WrittenFile,
    WrittenResult,
};
pub use output::{Report, TerminalOutput};

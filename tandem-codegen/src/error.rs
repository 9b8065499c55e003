//! Fatal stage errors.

use tandem_ir::QualifiedName;
use thiserror::Error;

/// A failure that aborts the pipeline.
///
/// These surface through `eyre::Report`; callers can recover the typed error
/// with `report.downcast_ref::<StageError>()`.
#[derive(Debug, Error)]
pub enum StageError {
    /// Two candidates in one stage produced the same generated name.
    #[error(
        "stage {stage} generated '{generated}' twice (from '{first}' and from '{second}')"
    )]
    DuplicateGeneratedName {
        stage: String,
        generated: QualifiedName,
        first: QualifiedName,
        second: QualifiedName,
    },

    /// Two units were given the same hint name, so one would overwrite the other.
    #[error("units from '{first}' and '{second}' share the output name '{hint}'")]
    DuplicateHintName {
        hint: String,
        first: QualifiedName,
        second: QualifiedName,
    },

    /// A generated unit did not parse when fed to the next stage.
    #[error("stage {stage_index} emitted source for '{hint}' that does not parse:\n{text}")]
    InvalidSyntheticSource {
        stage_index: usize,
        hint: String,
        text: String,
        #[source]
        source: Box<tandem_syntax::Error>,
    },

    /// The validate phase recorded error diagnostics.
    #[error("validation failed with {count} error(s)")]
    ValidationFailed { count: usize },
}

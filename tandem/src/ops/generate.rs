//! Generate operation - run the pipeline and write units.

use std::path::Path;

use eyre::{Context, Result};
use tandem_codegen::{
    Pipeline,
    pipeline::{Severity, SnapshotPlugin},
};
use tandem_core::{GeneratedFile, WriteResult};
use tandem_ir::Declaration;
use tandem_manifest::Manifest;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, StageSummary, WrittenFile,
    WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory generated units are written to.
    pub output_dir: &'a Path,
    /// Preview units without writing files.
    pub dry_run: bool,
    /// Write pipeline snapshots to this directory.
    pub visualize: Option<&'a Path>,
}

/// Execute the generate operation.
pub fn generate(
    manifest: &Manifest,
    declarations: Vec<Declaration>,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let declaration_count = declarations.len();

    let mut pipeline = Pipeline::from_manifest(manifest);
    if let Some(dir) = opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let output = pipeline.run(declarations).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = output
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(ToString::to_string)
        .collect();

    let stages = pipeline
        .stages()
        .iter()
        .map(|stage| StageSummary {
            stage: stage.to_string(),
            units: output.by_stage(&stage.suffix).count(),
        })
        .collect();

    let result = if opts.dry_run {
        let files = output
            .files()
            .map(|file| PreviewFile {
                path: file.file_name(),
                content: file.unit().text.clone(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut files = Vec::new();
        for file in output.files() {
            let result = file
                .write(opts.output_dir)
                .wrap_err_with(|| format!("Failed to write {}", file.file_name()))?;
            files.push(WrittenFile {
                path: file.file_name(),
                written: result == WriteResult::Written,
            });
        }
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files,
            debug_dir: opts.visualize.map(Path::to_path_buf),
        })
    };

    Ok(GenerateReport {
        name: manifest.pipeline.name.clone(),
        declaration_count,
        unit_count: output.units.len(),
        warnings,
        stages,
        result,
    })
}

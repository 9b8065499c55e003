//! Explain operation - describe the configured pipeline.

use std::path::Path;

use tandem_codegen::Pipeline;
use tandem_ir::{Carry, Refeed};
use tandem_manifest::Manifest;

use crate::reports::{ExplainReport, LintInfo, PhaseInfo, PipelineInfo, StageInfo};

/// Execute the explain operation.
pub fn explain(manifest: &Manifest, config_path: &Path) -> ExplainReport {
    let pipeline = Pipeline::from_manifest(manifest);
    let specs = pipeline.stages();

    let stages = specs
        .iter()
        .enumerate()
        .map(|(index, stage)| StageInfo {
            marker: stage.marker.to_string(),
            suffix: stage.suffix.clone(),
            property: stage.property_name().to_string(),
            constant: stage.constant,
            chained: specs
                .get(index + 1)
                .filter(|_| manifest.pipeline.chain)
                .map(|next| next.marker.to_string()),
        })
        .collect();

    ExplainReport {
        config_path: config_path.to_path_buf(),
        pipeline: PipelineInfo {
            name: manifest.pipeline.name.clone(),
            carry: carry_name(manifest.pipeline.carry),
            refeed: refeed_name(manifest.pipeline.refeed),
            chain: manifest.pipeline.chain,
        },
        stages,
        phases: pipeline
            .phase_info()
            .into_iter()
            .map(|p| PhaseInfo {
                name: p.name,
                description: p.description.to_string(),
            })
            .collect(),
        lints: pipeline
            .lint_info()
            .into_iter()
            .map(|l| LintInfo {
                name: l.name.to_string(),
                description: l.description.to_string(),
            })
            .collect(),
    }
}

fn carry_name(carry: Carry) -> &'static str {
    match carry {
        Carry::All => "all (inputs and generated)",
        Carry::Generated => "generated (generated only)",
    }
}

fn refeed_name(refeed: Refeed) -> &'static str {
    match refeed {
        Refeed::InMemory => "in-memory",
        Refeed::Reparse => "reparse",
    }
}

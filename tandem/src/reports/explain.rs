//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    /// `[pipeline]` settings.
    pub pipeline: PipelineInfo,
    /// Stage chain in order.
    pub stages: Vec<StageInfo>,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
}

/// Pipeline settings from the manifest.
#[derive(Debug)]
pub struct PipelineInfo {
    pub name: String,
    pub carry: &'static str,
    pub refeed: &'static str,
    pub chain: bool,
}

/// One stage of the chain.
#[derive(Debug)]
pub struct StageInfo {
    pub marker: String,
    pub suffix: String,
    pub property: String,
    pub constant: i64,
    /// Marker stamped on this stage's output, if the chain continues.
    pub chained: Option<String>,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    /// Phase name.
    pub name: String,
    /// Phase description.
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    /// Lint name.
    pub name: String,
    /// Lint description.
    pub description: String,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Tandem Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Name", &self.pipeline.name);
        out.key_value_indented("Carry", self.pipeline.carry);
        out.key_value_indented("Refeed", self.pipeline.refeed);
        out.key_value_indented("Chain", if self.pipeline.chain { "yes" } else { "no" });
        out.newline();

        out.section("Stages");
        for (i, stage) in self.stages.iter().enumerate() {
            let next = match &stage.chained {
                Some(marker) => format!(", output marked @{}", marker),
                None => String::new(),
            };
            out.numbered_item(
                i,
                &format!(
                    "@{} -> Name{} (const {} = {}){}",
                    stage.marker, stage.suffix, stage.property, stage.constant, next
                ),
            );
        }
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_stage_chain() {
        let report = ExplainReport {
            config_path: PathBuf::from("tandem.toml"),
            pipeline: PipelineInfo {
                name: "demo".to_string(),
                carry: "all",
                refeed: "in-memory",
                chain: true,
            },
            stages: vec![
                StageInfo {
                    marker: "Gen.GenerateA".to_string(),
                    suffix: "A".to_string(),
                    property: "A".to_string(),
                    constant: 1,
                    chained: Some("Gen.GenerateB".to_string()),
                },
                StageInfo {
                    marker: "Gen.GenerateB".to_string(),
                    suffix: "B".to_string(),
                    property: "B".to_string(),
                    constant: 2,
                    chained: None,
                },
            ],
            phases: vec![],
            lints: vec![],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(
            &"  0. @Gen.GenerateA -> NameA (const A = 1), output marked @Gen.GenerateB".to_string()
        ));
        assert!(
            out.lines
                .contains(&"  1. @Gen.GenerateB -> NameB (const B = 2)".to_string())
        );
    }
}

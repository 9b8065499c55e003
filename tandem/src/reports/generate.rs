//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a pipeline run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Pipeline name from the manifest.
    pub name: String,

    /// Number of declarations loaded from sources.
    pub declaration_count: usize,

    /// Number of generated units across all stages.
    pub unit_count: usize,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Units per stage, in chain order.
    pub stages: Vec<StageSummary>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Units produced by one stage.
#[derive(Debug)]
pub struct StageSummary {
    /// Stage display string, e.g. `@Gen.GenerateA -> *A (A = 1)`.
    pub stage: String,
    pub units: usize,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Every unit file, in emission order.
    pub files: Vec<WrittenFile>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// A unit file after writing.
#[derive(Debug)]
pub struct WrittenFile {
    /// File name relative to the output directory.
    pub path: String,
    /// `false` when the file already had identical content.
    pub written: bool,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        self.render_summary(out);
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for file in &written.files {
            if file.written {
                out.added_item(&file.path);
            } else {
                out.unchanged_item(&file.path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_summary(out);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }

    fn render_summary(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "{}: {} declarations, {} units",
            self.name, self.declaration_count, self.unit_count
        ));
        out.section(&format!("Stages ({})", self.stages.len()));
        for (i, stage) in self.stages.iter().enumerate() {
            out.numbered_item(i, &format!("{} - {} units", stage.stage, stage.units));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            name: "demo".to_string(),
            declaration_count: 2,
            unit_count: 1,
            warnings: vec!["'Demo.X' shadows a declaration".to_string()],
            stages: vec![StageSummary {
                stage: "@Gen.GenerateA -> *A (A = 1)".to_string(),
                units: 1,
            }],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("generated"),
            files: vec![
                WrittenFile {
                    path: "Demo.UserA.a.g.tdl".to_string(),
                    written: true,
                },
                WrittenFile {
                    path: "Demo.UserB.a.g.tdl".to_string(),
                    written: false,
                },
            ],
            debug_dir: None,
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "! warning: 'Demo.X' shadows a declaration",
                "demo: 2 declarations, 1 units",
                "Stages (1):",
                "  0. @Gen.GenerateA -> *A (A = 1) - 1 units",
                "",
                "Generated: generated",
                "  + Demo.UserA.a.g.tdl",
                "  = Demo.UserB.a.g.tdl",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "Demo.UserA.a.g.tdl".to_string(),
                content: "type UserAA {}".to_string(),
            }],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[1], "-- Demo.UserA.a.g.tdl --");
        assert_eq!(out.lines[2], "type UserAA {}");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }
}

//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and source validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of source files parsed.
    pub source_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Loaded declarations in source order.
    pub declarations: Vec<DeclarationInfo>,
}

/// A loaded declaration and the stages that select it.
#[derive(Debug)]
pub struct DeclarationInfo {
    pub name: String,
    pub selected_by: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.section(&format!(
            "Declarations ({} from {} files)",
            self.declarations.len(),
            self.source_count
        ));
        for decl in &self.declarations {
            if decl.selected_by.is_empty() {
                out.list_item(&decl.name);
            } else {
                out.list_item(&format!("{} <- {}", decl.name, decl.selected_by.join(", ")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_invalid_hides_declarations() {
        let report = CheckReport {
            config_path: PathBuf::from("tandem.toml"),
            source_count: 1,
            errors: vec!["suffix 'A-' is not an identifier".to_string()],
            warnings: vec![],
            infos: vec![],
            declarations: vec![DeclarationInfo {
                name: "Demo.User".to_string(),
                selected_by: vec![],
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec!["! error: suffix 'A-' is not an identifier", ""]
        );
    }

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("tandem.toml"),
            source_count: 1,
            errors: vec![],
            warnings: vec![],
            infos: vec![],
            declarations: vec![
                DeclarationInfo {
                    name: "Demo.User".to_string(),
                    selected_by: vec!["stage 0 (*A)".to_string()],
                },
                DeclarationInfo {
                    name: "Demo.Plain".to_string(),
                    selected_by: vec![],
                },
            ],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ tandem.toml is valid",
                "",
                "Declarations (2 from 1 files):",
                "  - Demo.User <- stage 0 (*A)",
                "  - Demo.Plain",
            ]
        );
    }
}

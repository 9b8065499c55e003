//! Result of a pipeline run.

use std::path::{Path, PathBuf};

use tandem_core::{GeneratedFile, SOURCE_EXTENSION};
use tandem_ir::{Declaration, GeneratedUnit, QualifiedName};

use super::Diagnostic;

/// Everything a successful run produced.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// Units in stage order, then candidate order.
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
    /// The working set after the last stage.
    pub declarations: Vec<Declaration>,
}

impl PipelineOutput {
    /// Rendered source of every unit.
    pub fn texts(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.text.as_str()).collect()
    }

    /// `(hint_name, text)` pairs, as handed to the host.
    pub fn outputs(&self) -> Vec<(&str, &str)> {
        self.units.iter().map(GeneratedUnit::output).collect()
    }

    /// The unit that generated `name`, if any.
    pub fn find(&self, name: &QualifiedName) -> Option<&GeneratedUnit> {
        self.units.iter().find(|u| &u.name == name)
    }

    /// Units emitted by the stage with `suffix`.
    pub fn by_stage<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = &'a GeneratedUnit> {
        self.units.iter().filter(move |u| u.stage == suffix)
    }

    /// Units as files to write under an output directory.
    pub fn files(&self) -> impl Iterator<Item = UnitFile<'_>> {
        self.units.iter().map(UnitFile::new)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// A generated unit written as `<hint_name>.tdl`.
#[derive(Debug, Clone, Copy)]
pub struct UnitFile<'a> {
    unit: &'a GeneratedUnit,
}

impl<'a> UnitFile<'a> {
    pub fn new(unit: &'a GeneratedUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> &'a GeneratedUnit {
        self.unit
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.unit.hint_name, SOURCE_EXTENSION)
    }
}

impl GeneratedFile for UnitFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        self.unit.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use tandem_core::WriteResult;

    use super::*;
    use crate::{
        Pipeline,
        testing::{demo_declarations, demo_stages},
    };

    fn output() -> PipelineOutput {
        Pipeline::new(demo_stages())
            .run(demo_declarations())
            .unwrap()
    }

    #[test]
    fn test_find_and_outputs() {
        let output = output();

        let unit = output
            .find(&QualifiedName::new("Demo", "UserModelAAB"))
            .unwrap();
        assert_eq!(unit.constant, 2);
        assert_eq!(unit.from.to_string(), "Demo.UserModelAA");

        let (hint, text) = output.outputs()[0];
        assert_eq!(hint, "Demo.UserModelA.a.g");
        assert!(text.contains("type UserModelAA"));
        assert_eq!(output.texts().len(), output.units.len());
        assert_eq!(output.by_stage("B").count(), 3);
    }

    #[test]
    fn test_unit_files_write_once() {
        let dir = tempfile::tempdir().unwrap();
        let output = output();

        for file in output.files() {
            assert_eq!(file.write(dir.path()).unwrap(), WriteResult::Written);
        }
        for file in output.files() {
            assert_eq!(file.write(dir.path()).unwrap(), WriteResult::Unchanged);
        }

        let written = std::fs::read_to_string(dir.path().join("Demo.UserModelA.a.g.tdl")).unwrap();
        assert_eq!(written, output.units[0].text);
    }
}

//! Template Emitter.
//!
//! Rendering is split in two: a [`Template`] decides names and text, and the
//! [`Emitter`] assembles the [`GeneratedUnit`] around them.

use tandem_ir::{Candidate, GeneratedUnit, Marker, QualifiedName, StageSpec};
use tandem_syntax::{SourceFile, TypeDecl, print};

/// Everything a template needs to render one unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitSpec<'a> {
    /// Name of the generated declaration.
    pub name: &'a QualifiedName,
    /// Name of the candidate it is derived from.
    pub from: &'a QualifiedName,
    pub stage: &'a StageSpec,
    /// Marker for the next stage, if the chain continues.
    pub chained: Option<&'a Marker>,
}

/// Naming and rendering rules for generated units.
pub trait Template: Send + Sync {
    /// Template name (for debugging and reports).
    fn name(&self) -> &'static str;

    /// Name of the declaration generated for `candidate`.
    ///
    /// Defaults to the candidate's name plus the stage suffix, in the
    /// candidate's namespace.
    fn generated_name(&self, candidate: &Candidate<'_>, stage: &StageSpec) -> QualifiedName {
        let from = candidate.name();
        from.with_name(format!("{}{}", from.name, stage.suffix))
    }

    /// Identifying name handed to the host, e.g. `Demo.UserModel.a.g`.
    ///
    /// Hint names become file names, so they keep the candidate's namespace.
    fn hint_name(&self, candidate: &Candidate<'_>, stage: &StageSpec) -> String {
        format!("{}.{}.g", candidate.name(), stage.hint_segment())
    }

    /// Render the unit's source text.
    fn render(&self, unit: &UnitSpec<'_>) -> String;
}

/// Renders units in the tandem declaration language.
///
/// The output goes through the same printer the parser round-trips with,
/// so rendered units always reparse.
#[derive(Debug, Clone, Copy, Default)]
pub struct TdlTemplate;

impl Template for TdlTemplate {
    fn name(&self) -> &'static str {
        "tdl"
    }

    fn render(&self, unit: &UnitSpec<'_>) -> String {
        let mut decl = TypeDecl::new(unit.name.name.as_str());
        if let Some(marker) = unit.chained {
            decl = decl.marker(marker.as_str());
        }
        let decl = decl.constant(unit.stage.property_name(), unit.stage.constant);

        let file = SourceFile::new()
            .header(format!(
                "Generated by tandem stage {} from {}. Do not edit.",
                unit.stage.suffix, unit.from
            ))
            .namespace(&unit.name.namespace)
            .with_type(decl);

        print(&file)
    }
}

/// Turns candidates into generated units using a [`Template`].
#[derive(Clone, Copy)]
pub struct Emitter<'t> {
    template: &'t dyn Template,
}

impl<'t> Emitter<'t> {
    pub fn new(template: &'t dyn Template) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &'t dyn Template {
        self.template
    }

    /// Emit one unit for `candidate` at `stage`.
    ///
    /// When `chain` is set, the generated declaration carries that marker so
    /// the next stage selects it.
    pub fn emit(
        &self,
        candidate: &Candidate<'_>,
        stage: &StageSpec,
        chain: Option<&Marker>,
    ) -> GeneratedUnit {
        let name = self.template.generated_name(candidate, stage);
        let hint_name = self.template.hint_name(candidate, stage);
        let text = self.template.render(&UnitSpec {
            name: &name,
            from: candidate.name(),
            stage,
            chained: chain,
        });

        GeneratedUnit {
            name,
            from: candidate.name().clone(),
            stage: stage.suffix.clone(),
            hint_name,
            property: stage.property_name().to_string(),
            constant: stage.constant,
            chained: chain.cloned(),
            text,
        }
    }
}

impl Default for Emitter<'static> {
    fn default() -> Self {
        Self::new(&TdlTemplate)
    }
}

impl std::fmt::Debug for Emitter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("template", &self.template.name())
            .finish()
    }
}

/// Emit a terminal unit for `candidate` with the default template.
///
/// The property is named after the suffix and no chain marker is attached.
pub fn emit(candidate: &Candidate<'_>, suffix: &str, constant: i64) -> GeneratedUnit {
    let stage = StageSpec::new(candidate.marker.clone(), suffix, constant);
    Emitter::default().emit(candidate, &stage, None)
}

//! Stage configuration.

use serde::{Deserialize, Serialize};

use crate::Marker;

/// One scan-then-emit pass: its marker, naming suffix, and embedded constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSpec {
    /// Declarations carrying this marker are processed by the stage.
    pub marker: Marker,
    /// Appended to a candidate's name to form the generated name.
    pub suffix: String,
    /// Value of the generated read-only property.
    pub constant: i64,
    /// Name of the generated property; defaults to the suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl StageSpec {
    pub fn new(marker: impl Into<Marker>, suffix: impl Into<String>, constant: i64) -> Self {
        Self {
            marker: marker.into(),
            suffix: suffix.into(),
            constant,
            property: None,
        }
    }

    /// Override the generated property name.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn property_name(&self) -> &str {
        self.property.as_deref().unwrap_or(&self.suffix)
    }

    /// The suffix as it appears in output names: lowercased.
    ///
    /// Two stages whose segments are equal would write the same file for a
    /// declaration carrying both markers.
    pub fn hint_segment(&self) -> String {
        self.suffix.to_lowercase()
    }
}

impl std::fmt::Display for StageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "@{} -> *{} ({} = {})",
            self.marker,
            self.suffix,
            self.property_name(),
            self.constant
        )
    }
}

/// What the next stage's working set contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Carry {
    /// The previous working set followed by the stage's generated declarations.
    #[default]
    All,
    /// Only the stage's generated declarations.
    Generated,
}

/// How generated units are turned back into declarations for the next stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Refeed {
    /// Build declarations directly from the units.
    #[default]
    InMemory,
    /// Parse each unit's rendered text and lower it.
    Reparse,
}

//! Declarations visible to the pipeline.

use std::path::PathBuf;

use serde::Serialize;

use crate::MarkerSet;

/// A namespace-qualified type name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct QualifiedName {
    /// Dot-separated namespace, empty for the global namespace.
    pub namespace: String,
    /// Simple type name.
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a dotted path (`Demo.UserModel`) into namespace and name.
    pub fn parse(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", path),
        }
    }

    /// A sibling name in the same namespace.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(self.namespace.clone(), name)
    }

    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_global() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// Where a declaration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Parsed from a source file.
    Source { path: PathBuf },
    /// Emitted by a stage from another declaration.
    Generated { stage: String, from: QualifiedName },
    /// Built directly in memory.
    Synthetic,
}

/// A named type definition with attached markers.
///
/// Declarations are immutable once built; identity is the qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: QualifiedName,
    pub markers: MarkerSet,
    pub origin: Origin,
}

impl Declaration {
    pub fn new(name: QualifiedName, markers: MarkerSet, origin: Origin) -> Self {
        Self {
            name,
            markers,
            origin,
        }
    }

    /// Build an in-memory declaration from a dotted path and marker paths.
    ///
    /// ```
    /// use tandem_ir::{Declaration, Marker};
    ///
    /// let decl = Declaration::synthetic("Demo.UserModel", ["Gen.GenerateA"]);
    /// assert_eq!(decl.name.to_string(), "Demo.UserModel");
    /// assert!(decl.markers.contains(&Marker::new("Gen.GenerateA")));
    /// ```
    pub fn synthetic<'a>(path: &str, markers: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            QualifiedName::parse(path),
            markers.into_iter().map(crate::Marker::new).collect(),
            Origin::Synthetic,
        )
    }

    /// True if this declaration was emitted by a stage.
    pub fn is_generated(&self) -> bool {
        matches!(self.origin, Origin::Generated { .. })
    }
}

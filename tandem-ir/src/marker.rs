//! Markers and marker resolution.

use std::collections::BTreeSet;

use serde::Serialize;

/// An opaque tag used to select declarations for a stage.
///
/// A marker is identified by its fully qualified path, e.g. `Gen.GenerateA`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Marker(String);

impl Marker {
    /// Create a marker from its fully qualified path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The fully qualified path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Marker {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// The markers attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSet {
    /// Every marker reference was resolved.
    Resolved(BTreeSet<Marker>),
    /// At least one marker reference could not be resolved.
    ///
    /// Such a declaration never matches any marker.
    Unresolved { reason: String },
}

impl MarkerSet {
    /// A resolved, empty set.
    pub fn empty() -> Self {
        Self::Resolved(BTreeSet::new())
    }

    /// Create an unresolved set.
    pub fn unresolved(reason: impl Into<String>) -> Self {
        Self::Unresolved {
            reason: reason.into(),
        }
    }

    /// Set membership. Always false for an unresolved set.
    pub fn contains(&self, marker: &Marker) -> bool {
        match self {
            Self::Resolved(markers) => markers.contains(marker),
            Self::Unresolved { .. } => false,
        }
    }

    /// Returns true if the set was resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Iterate over resolved markers. Yields nothing for an unresolved set.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        let markers = match self {
            Self::Resolved(markers) => Some(markers.iter()),
            Self::Unresolved { .. } => None,
        };
        markers.into_iter().flatten()
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self::Resolved(iter.into_iter().collect())
    }
}

/// Outcome of resolving a written marker reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The reference names a registered marker.
    Known(Marker),
    /// The reference names nothing the registry knows; kept as written.
    Foreign(Marker),
    /// The reference matches more than one registered marker through imports.
    Ambiguous(Vec<Marker>),
}

/// The set of markers stages select on.
///
/// Short marker references in source (`@GenerateA`) are resolved against this
/// registry using the referencing file's namespace and imports.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    markers: BTreeSet<Marker>,
}

impl MarkerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a marker.
    pub fn register(&mut self, marker: Marker) -> &mut Self {
        self.markers.insert(marker);
        self
    }

    /// Returns true if the marker is registered.
    pub fn contains(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }

    /// Iterate over registered markers in path order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Resolve a marker reference written inside `namespace` with `imports` in scope.
    ///
    /// Dotted references are fully qualified. Short references are looked up
    /// in the enclosing namespaces first, innermost outward, and then across
    /// all imports, where more than one hit is ambiguous.
    pub fn resolve(&self, written: &str, namespace: &str, imports: &[String]) -> Resolution {
        if written.contains('.') {
            let marker = Marker::new(written);
            return if self.contains(&marker) {
                Resolution::Known(marker)
            } else {
                Resolution::Foreign(marker)
            };
        }

        for scope in enclosing_namespaces(namespace) {
            let marker = Marker::new(qualify(scope, written));
            if self.contains(&marker) {
                return Resolution::Known(marker);
            }
        }

        let mut hits: Vec<Marker> = imports
            .iter()
            .map(|import| Marker::new(qualify(import, written)))
            .filter(|marker| self.contains(marker))
            .collect();
        hits.sort();
        hits.dedup();

        match hits.len() {
            0 => Resolution::Foreign(Marker::new(written)),
            1 => Resolution::Known(hits.remove(0)),
            _ => Resolution::Ambiguous(hits),
        }
    }
}

impl FromIterator<Marker> for MarkerRegistry {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self {
            markers: iter.into_iter().collect(),
        }
    }
}

/// `Demo.Models` yields `Demo.Models`, `Demo`, then the global namespace.
fn enclosing_namespaces(namespace: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(namespace);
    std::iter::from_fn(move || {
        let current = next?;
        next = if current.is_empty() {
            None
        } else {
            Some(current.rsplit_once('.').map_or("", |(parent, _)| parent))
        };
        Some(current)
    })
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

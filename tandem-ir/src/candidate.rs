//! Candidates selected by a scan.

use crate::{Declaration, Marker, QualifiedName};

/// A declaration known to carry a specific marker.
///
/// Candidates borrow from the working set of the stage that selected them
/// and do not outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub declaration: &'a Declaration,
    pub marker: &'a Marker,
}

impl<'a> Candidate<'a> {
    pub fn new(declaration: &'a Declaration, marker: &'a Marker) -> Self {
        Self {
            declaration,
            marker,
        }
    }

    pub fn name(&self) -> &'a QualifiedName {
        &self.declaration.name
    }
}

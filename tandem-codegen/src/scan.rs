//! Declaration Scanner.

use tandem_ir::{Candidate, Declaration, Marker, MarkerSet};

/// Select the declarations carrying `marker`, preserving input order.
///
/// Membership is exact set membership on the resolved marker set.
/// Declarations whose markers could not be resolved are skipped.
pub fn scan<'a>(declarations: &'a [Declaration], marker: &'a Marker) -> Vec<Candidate<'a>> {
    declarations
        .iter()
        .filter(|decl| decl.markers.contains(marker))
        .map(|decl| Candidate::new(decl, marker))
        .collect()
}

/// Declarations a scan skips because their markers are unresolved, with the reason.
pub fn unresolved(declarations: &[Declaration]) -> impl Iterator<Item = (&Declaration, &str)> {
    declarations.iter().filter_map(|decl| match &decl.markers {
        MarkerSet::Unresolved { reason } => Some((decl, reason.as_str())),
        MarkerSet::Resolved(_) => None,
    })
}

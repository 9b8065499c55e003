//! Built-in lints.

mod duplicate_suffix;
mod suffix_identifier;
mod unused_marker;

pub use duplicate_suffix::DuplicateSuffixLint;
pub use suffix_identifier::SuffixIdentifierLint;
pub use unused_marker::UnusedMarkerLint;

//! Intermediate representation types for the tandem code generator.
//!
//! These types are the common currency of the pipeline. Parsed source,
//! synthetic declarations, and everything a stage emits are expressed here.
//!
//! # Architecture
//!
//! ```text
//! .tdl (source) → tandem-syntax (parse + lower) → Declaration → stages → GeneratedUnit
//! ```
//!
//! The IR is deliberately host-agnostic: a declaration only knows its
//! qualified name, its markers, and where it came from.

mod candidate;
mod declaration;
mod marker;
mod stage;
mod unit;

pub use candidate::Candidate;
pub use declaration::{Declaration, Origin, QualifiedName};
pub use marker::{Marker, MarkerRegistry, MarkerSet, Resolution};
pub use stage::{Carry, Refeed, StageSpec};
pub use unit::GeneratedUnit;

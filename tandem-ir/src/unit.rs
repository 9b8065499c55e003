//! Units emitted by a stage.

use serde::Serialize;

use crate::{Marker, QualifiedName};

/// The text of one synthetic declaration plus the facts it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// Qualified name of the generated declaration.
    pub name: QualifiedName,
    /// Qualified name of the candidate it was derived from.
    pub from: QualifiedName,
    /// Suffix of the stage that emitted it.
    pub stage: String,
    /// Identifying name handed to the host, e.g. `Demo.UserModel.a.g`.
    pub hint_name: String,
    /// Name of the generated read-only property.
    pub property: String,
    /// Value of the generated read-only property.
    pub constant: i64,
    /// Marker stamped on the unit so the next stage picks it up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chained: Option<Marker>,
    /// Rendered source text.
    pub text: String,
}

impl GeneratedUnit {
    /// The `(hint_name, text)` pair handed to the host.
    pub fn output(&self) -> (&str, &str) {
        (&self.hint_name, &self.text)
    }
}

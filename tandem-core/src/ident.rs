//! Identifier rules for the declaration language.

/// Reserved words of the declaration language.
pub const KEYWORDS: &[&str] = &["use", "namespace", "type", "const", "int"];

/// Check if a name is a reserved word.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Check if a name is a usable identifier.
pub fn is_identifier(name: &str) -> bool {
    validate_identifier(name).is_none()
}

/// Validate an identifier, returning the reason it is rejected.
///
/// Identifiers start with an ASCII letter or underscore and continue with
/// ASCII letters, digits, or underscores. Reserved words are rejected.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name can only contain letters, numbers, and underscores");
    }

    if is_keyword(name) {
        return Some("name is a reserved word");
    }

    None
}

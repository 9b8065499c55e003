//! Shared string helpers.

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_upper = true;
    for c in s.chars() {
        if c.is_uppercase() {
            if !prev_upper {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_upper = true;
        } else {
            result.push(c);
            prev_upper = false;
        }
    }
    result.replace('-', "_")
}

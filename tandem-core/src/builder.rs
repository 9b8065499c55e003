//! Indentation-aware text builder for rendering source.

const INDENT: &str = "    ";

/// Builds source text line by line, indenting four spaces per level.
///
/// ```
/// use tandem_core::CodeBuilder;
///
/// let mut code = CodeBuilder::default();
/// code.push_line("type User {")
///     .push_indent()
///     .push_line("const A: int = 1;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(code.build(), "type User {\n    const A: int = 1;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the rendered text.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut code = CodeBuilder::default();
        code.push_line("type Foo {")
            .push_indent()
            .push_line("const A: int = 1;")
            .push_dedent()
            .push_line("}");

        assert_eq!(code.build(), "type Foo {\n    const A: int = 1;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let mut code = CodeBuilder::default();
        code.push_line("namespace Demo;")
            .push_blank()
            .push_line("type Foo {}");

        assert_eq!(code.build(), "namespace Demo;\n\ntype Foo {}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut code = CodeBuilder::default();
        assert!(code.is_empty());

        code.push_dedent().push_indent().push_line("x");

        assert!(!code.is_empty());
        assert_eq!(code.build(), "    x\n");
    }
}

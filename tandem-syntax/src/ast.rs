//! Syntax tree of a declaration source file.
//!
//! Nodes carry spans when parsed; nodes built in memory (for instance by a
//! code template) use empty spans.

use crate::Span;

/// An identifier with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub text: String,
    pub span: Span,
}

impl Ident {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            span: Span::default(),
        }
    }
}

/// A dotted path such as `Gen.GenerateA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Ident>,
    pub span: Span,
}

impl Path {
    /// Build a path from dotted text without validating the segments.
    pub fn from_dotted(text: &str) -> Self {
        Self {
            segments: text.split('.').map(Ident::new).collect(),
            span: Span::default(),
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

/// `const <name>: int = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstItem {
    pub name: Ident,
    pub value: i64,
    pub span: Span,
}

/// A marked type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub markers: Vec<Path>,
    pub name: Ident,
    pub consts: Vec<ConstItem>,
    pub span: Span,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            markers: Vec::new(),
            name: Ident::new(name),
            consts: Vec::new(),
            span: Span::default(),
        }
    }

    /// Attach a marker reference.
    pub fn marker(mut self, path: &str) -> Self {
        self.markers.push(Path::from_dotted(path));
        self
    }

    /// Add a read-only integer constant.
    pub fn constant(mut self, name: impl Into<String>, value: i64) -> Self {
        self.consts.push(ConstItem {
            name: Ident::new(name),
            value,
            span: Span::default(),
        });
        self
    }

    /// Look up a constant by name.
    pub fn const_value(&self, name: &str) -> Option<i64> {
        self.consts
            .iter()
            .find(|c| c.name.text == name)
            .map(|c| c.value)
    }
}

/// A parsed `.tdl` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Leading `//` comment lines written by the printer. Not filled in by the parser.
    pub header: Vec<String>,
    pub imports: Vec<Path>,
    pub namespace: Option<Path>,
    pub types: Vec<TypeDecl>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Set the file namespace. An empty string leaves the file global.
    pub fn namespace(mut self, path: &str) -> Self {
        self.namespace = (!path.is_empty()).then(|| Path::from_dotted(path));
        self
    }

    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    /// The namespace as dotted text, empty when global.
    pub fn namespace_str(&self) -> String {
        self.namespace
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Find a type by simple name.
    pub fn find_type(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|t| t.name.text == name)
    }
}

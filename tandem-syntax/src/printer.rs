//! Canonical printer for declaration sources.

use tandem_core::CodeBuilder;

use crate::ast::{SourceFile, TypeDecl};

/// Render a source file as canonical `.tdl` text.
///
/// Sections (header, imports, namespace, types) are separated by a blank
/// line; the output ends with a single newline.
pub fn print(file: &SourceFile) -> String {
    let mut builder = CodeBuilder::default();

    for line in &file.header {
        builder.push_line(&format!("// {}", line));
    }

    if !file.imports.is_empty() {
        separate(&mut builder);
        for import in &file.imports {
            builder.push_line(&format!("use {};", import));
        }
    }

    if let Some(namespace) = &file.namespace {
        separate(&mut builder);
        builder.push_line(&format!("namespace {};", namespace));
    }

    for decl in &file.types {
        separate(&mut builder);
        print_type(&mut builder, decl);
    }

    builder.build()
}

fn separate(builder: &mut CodeBuilder) {
    if !builder.is_empty() {
        builder.push_blank();
    }
}

fn print_type(builder: &mut CodeBuilder, decl: &TypeDecl) {
    for marker in &decl.markers {
        builder.push_line(&format!("@{}", marker));
    }

    if decl.consts.is_empty() {
        builder.push_line(&format!("type {} {{}}", decl.name.text));
        return;
    }

    builder.push_line(&format!("type {} {{", decl.name.text));
    builder.push_indent();
    for item in &decl.consts {
        builder.push_line(&format!("const {}: int = {};", item.name.text, item.value));
    }
    builder.push_dedent();
    builder.push_line("}");
}

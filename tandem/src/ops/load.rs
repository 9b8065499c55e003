//! Load operation - parse and lower declaration sources.

use std::path::{Path, PathBuf};

use tandem_ir::{Declaration, Origin};
use tandem_manifest::TandemToml;
use tracing::debug;

/// Parse every source file and lower it against the manifest's markers.
///
/// Declarations keep file order, then declaration order within a file.
/// Origins record paths relative to the manifest directory.
pub fn load_declarations(
    toml: &TandemToml,
    files: &[PathBuf],
) -> tandem_syntax::Result<Vec<Declaration>> {
    let registry = toml.manifest().registry();
    let mut declarations = Vec::new();

    for path in files {
        let file = tandem_syntax::parse_file(path)?;
        let origin = Origin::Source {
            path: relative_to(path, toml.base_dir()),
        };
        let lowered = tandem_syntax::lower(&file, &registry, &origin);
        debug!(path = %path.display(), declarations = lowered.len(), "loaded source");
        declarations.extend(lowered);
    }

    Ok(declarations)
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}

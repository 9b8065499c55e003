//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, MANIFEST_FILE, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a tandem.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a tandem.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.stages.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("no stages defined; add a [[stages]] entry", None));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    // Keyed by the lowercased suffix used in output file names.
    let mut suffixes: HashMap<String, (&str, &str)> = HashMap::new();
    for stage in &manifest.stages {
        ctx.validate_marker(&stage.marker)?;
        ctx.validate_suffix(&stage.suffix)?;
        if let Some(property) = &stage.property {
            ctx.validate_property(property)?;
        }

        let count = seen.entry(stage.marker.as_str()).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(ctx.source_context().duplicate_stage_error(
                &stage.marker,
                ctx.value_span(&stage.marker, 0),
                ctx.value_span(&stage.marker, 1),
            ));
        }

        let key = stage.suffix.to_lowercase();
        if let Some((first_suffix, first_marker)) =
            suffixes.insert(key, (stage.suffix.as_str(), stage.marker.as_str()))
        {
            let message = if first_suffix == stage.suffix {
                format!(
                    "suffix '{}' is used by both '{}' and '{}'",
                    stage.suffix, first_marker, stage.marker
                )
            } else {
                format!(
                    "suffixes '{}' ('{}') and '{}' ('{}') differ only in case",
                    first_suffix, first_marker, stage.suffix, stage.marker
                )
            };
            let nth = usize::from(first_suffix == stage.suffix);
            return Err(ctx
                .source_context()
                .validation_error(message, ctx.value_span(&stage.suffix, nth)));
        }
    }

    Ok(())
}

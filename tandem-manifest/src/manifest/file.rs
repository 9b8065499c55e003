use std::path::{Path, PathBuf};

use tandem_core::SOURCE_EXTENSION;

use super::Manifest;
use crate::{Error, Result};

/// Represents a tandem.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct TandemToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TandemToml {
    /// Open and parse a tandem.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.sources.output)
    }

    /// Every `.tdl` file under the source directories, sorted, skipping the output directory.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let output = self.output_dir();
        let mut files = Vec::new();
        for dir in &self.manifest.sources.dirs {
            collect_sources(&self.base_dir().join(dir), &output, &mut files)?;
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

fn collect_sources(dir: &Path, output: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if dir == output {
        return Ok(());
    }

    let io_error = |source| {
        Box::new(Error::Io {
            path: dir.to_path_buf(),
            source,
        })
    };

    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            collect_sources(&path, output, files)?;
        } else if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

use anyhow::{Context, Result};
use repogen_codegen::Artifacts;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// How artifacts are laid out on disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Record, repository interface and implementation in their package
    /// directories
    #[default]
    Layered,

    /// Only the record, as `<table>.go` directly in the output directory
    SingleFile,
}

/// Writes rendered artifacts under an output directory.
#[derive(Debug, Clone)]
pub struct Writer {
    out_dir: PathBuf,
    layout: Layout,
}

impl Writer {
    pub fn new(out_dir: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            out_dir: out_dir.into(),
            layout,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes the artifacts for `table`, creating directories as needed, and
    /// returns the written paths. Existing files are overwritten.
    pub fn write(&self, table: &str, artifacts: &Artifacts) -> Result<Vec<PathBuf>> {
        let files: Vec<(PathBuf, &str)> = match self.layout {
            Layout::Layered => artifacts
                .iter()
                .map(|artifact| (self.out_dir.join(&artifact.path), artifact.contents.as_str()))
                .collect(),
            Layout::SingleFile => vec![(
                self.out_dir.join(format!("{table}.go")),
                artifacts.record.contents.as_str(),
            )],
        };

        for (path, contents) in &files {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }

            fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote artifact");
        }

        Ok(files.into_iter().map(|(path, _)| path).collect())
    }
}

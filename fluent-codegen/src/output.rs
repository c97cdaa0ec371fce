//! Writing a set of generated files.
//!
//! Generated sources are always regenerated, but a file whose content is
//! already current is not rewritten, so build tools watching the output
//! tree do not see spurious changes.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::trace;

use crate::language::PreviewFile;

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    Unchanged,
}

/// A generated file to be written relative to an output directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file unless it already holds the same content.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);
        if let Ok(existing) = std::fs::read_to_string(&path)
            && existing == self.content
        {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(WriteResult::Written)
    }
}

/// The files of one generation run, in registration order.
#[derive(Debug, Default)]
pub struct FileSet {
    entries: Vec<FileEntry>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (path and content pairs).
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries
            .iter()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files to the output directory.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in &self.entries {
            let result = entry.write(base)?;
            trace!(path = %entry.path, ?result, "output file");
            match result {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Unchanged => {
                    stats.unchanged += 1;
                    stats.unchanged_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    pub written: usize,
    /// Files that already held the generated content.
    pub unchanged: usize,
    pub written_paths: Vec<String>,
    pub unchanged_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

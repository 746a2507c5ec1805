//! Discovery - resolves a target path to the Markdown files to check
//!
//! A target is either a single Markdown file or a directory that is walked
//! recursively. Results are sorted so runs are deterministic.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use tagcheck::discovery::{DiscoveryOptions, collect_markdown_files};
//!
//! let files = collect_markdown_files(Path::new("notes"), &DiscoveryOptions::default()).unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while resolving a target
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Target path does not exist
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Target is neither a directory nor a Markdown file
    #[error("not a directory or Markdown file: {}", .0.display())]
    NotMarkdown(PathBuf),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error reading a file
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// What counts as a Markdown file and what to skip
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Extensions without the leading dot
    pub extensions: Vec<String>,

    /// Patterns matched against paths relative to the target directory
    pub exclude: Vec<glob::Pattern>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            exclude: Vec::new(),
        }
    }
}

impl DiscoveryOptions {
    /// Whether the file name ends with one of the Markdown extensions
    ///
    /// A file named just `.md` counts.
    #[must_use]
    pub fn is_markdown(&self, path: &Path) -> bool {
        path.file_name().and_then(|name| name.to_str()).is_some_and(|name| {
            self.extensions.iter().any(|ext| {
                name.strip_suffix(ext.as_str()).is_some_and(|stem| stem.ends_with('.'))
            })
        })
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches_path(relative))
    }
}

/// Kind of target being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A directory walked recursively
    Directory,
    /// A single Markdown file
    File,
}

/// Classify a target, failing if it cannot be checked
pub fn classify(target: &Path, options: &DiscoveryOptions) -> Result<TargetKind, DiscoveryError> {
    if !target.exists() {
        return Err(DiscoveryError::NotFound(target.to_path_buf()));
    }

    if target.is_dir() {
        Ok(TargetKind::Directory)
    } else if target.is_file() && options.is_markdown(target) {
        Ok(TargetKind::File)
    } else {
        Err(DiscoveryError::NotMarkdown(target.to_path_buf()))
    }
}

/// Collect the Markdown files under `target`
///
/// A Markdown file target yields itself. A directory yields every matching
/// file below it, sorted, minus excluded paths.
pub fn collect_markdown_files(
    target: &Path,
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    match classify(target, options)? {
        TargetKind::File => Ok(vec![target.to_path_buf()]),
        TargetKind::Directory => walk_directory(target, options),
    }
}

/// Collect the Markdown files below a directory, sorted, minus excluded paths
///
/// Symbolic links to files and directories are followed.
pub fn walk_directory(root: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    for entry in walker.into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        if e.path() == root {
            return true;
        }
        let relative = e.path().strip_prefix(root).unwrap_or(e.path());
        !options.is_excluded(relative)
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() || !options.is_markdown(entry.path()) {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    log::debug!("found {} markdown file(s) under {}", files.len(), root.display());
    Ok(files)
}

/// Read a Markdown file as text
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_markdown(path: &Path) -> Result<String, DiscoveryError> {
    let bytes = fs::read(path).map_err(|source| DiscoveryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

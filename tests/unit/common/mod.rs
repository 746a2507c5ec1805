//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing tagcheck components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A notes directory with a standard structure
pub struct TestNotes {
    dir: TempDir,
}

impl TestNotes {
    /// Create a new notes directory:
    /// ```text
    /// /
    /// ├── Frontend/
    /// │   └── Vue/
    /// │       ├── basics.md
    /// │       └── components/
    /// │           └── slots.md
    /// ├── Backend/
    /// │   └── intro.md
    /// └── assets/
    ///     └── logo.svg
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        fs::create_dir_all(dir.path().join("Frontend/Vue/components")).unwrap();
        fs::create_dir_all(dir.path().join("Backend")).unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();

        fs::write(
            dir.path().join("Frontend/Vue/basics.md"),
            "# Basics\n\n<div class=\"tip\">\nUse <code>v-if</code>.\n</div>\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("Frontend/Vue/components/slots.md"),
            "# Slots\n\n```vue\n<template><slot></template>\n```\n",
        )
        .unwrap();
        fs::write(dir.path().join("Backend/intro.md"), "# Intro\n\n<br>\n").unwrap();
        fs::write(dir.path().join("assets/logo.svg"), "<svg>").unwrap();

        Self { dir }
    }

    /// Get the root path of the notes directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Join a relative path onto the root
    pub fn join(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

impl Default for TestNotes {
    fn default() -> Self {
        Self::new()
    }
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Defect, FileResult, TagOccurrence};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking a target
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Whether no file had defects
    pub passed: bool,
    /// The path that was checked
    pub target: String,
    /// Whether the target was a directory
    pub is_directory: bool,
    /// Number of files checked
    pub files_checked: usize,
    /// Number of defects across all files
    pub total_defects: usize,
    /// Per-file reports (files with defects, or all files when tags are listed)
    pub files: Vec<FileReport>,
}

/// Report for a single file
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File path, relative to the working directory when possible
    pub path: String,
    /// Defects found
    pub defects: Vec<Defect>,
    /// Diagnostic lines for the defects
    pub messages: Vec<String>,
    /// Line of a code fence left open, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unterminated_fence: Option<usize>,
    /// Tags seen, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagOccurrence>>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl FileReport {
    /// Build a report from a checker result
    #[must_use]
    pub fn from_result(path: String, result: FileResult, include_tags: bool) -> Self {
        Self {
            path,
            defects: result.defects,
            messages: result.messages,
            unterminated_fence: result.unterminated_fence,
            tags: include_tags.then_some(result.occurrences),
        }
    }

    /// Whether the file had any defects
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.defects.is_empty()
    }
}

impl RunReport {
    /// Create an empty report for a target
    #[must_use]
    pub fn new(target: &Path, is_directory: bool) -> Self {
        Self {
            passed: true,
            target: target.display().to_string(),
            is_directory,
            files_checked: 0,
            total_defects: 0,
            files: Vec::new(),
        }
    }

    /// Record one checked file
    ///
    /// Clean files are only kept when `keep_clean` is set.
    pub fn add(&mut self, file: FileReport, keep_clean: bool) {
        self.files_checked += 1;
        self.total_defects += file.defects.len();
        if file.has_error() {
            self.passed = false;
        }
        if file.has_error() || keep_clean {
            self.files.push(file);
        }
    }

    /// Files that had defects
    pub fn failing_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.has_error())
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.is_directory {
            println!("Checking directory: {}\n", self.target);
            println!("Found {} Markdown file(s)\n", self.files_checked);
        } else {
            println!("Checking file: {}\n", self.target);
        }

        for file in &self.files {
            if let Some(tags) = &file.tags {
                println!("{}", file.path.bold());
                for tag in tags {
                    println!("   {:>5}  {:<14} {}", tag.line, tag.markup(), tag.content.dimmed());
                }
                println!();
            }
        }

        let failing: Vec<&FileReport> = self.failing_files().collect();
        if failing.is_empty() {
            println!("{} All HTML tags are properly closed.", "OK".green().bold());
            return;
        }

        println!("{} Found problems in {} file(s):\n", "FAIL".red().bold(), failing.len());
        for file in failing {
            println!("{}", file.path.bold());
            for message in &file.messages {
                println!("   {message}");
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

//! Defect model
//!
//! Defects are reported, never raised: the checker always finishes and
//! hands back every defect it found, in the order it found them.

use serde::{Deserialize, Serialize};

/// A tag nesting problem found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Defect {
    /// An end tag arrived while no start tag was open
    UnmatchedEndTag {
        /// End tag name as written
        tag: String,
        /// Line of the end tag
        line: usize,
        /// Trimmed line text
        content: String,
    },

    /// An end tag did not match the innermost open start tag
    MismatchedTag {
        /// Name of the innermost open start tag
        expected: String,
        /// Line the expected tag was opened on
        opened_at: usize,
        /// End tag name actually found
        found: String,
        /// Line of the end tag
        line: usize,
        /// Trimmed line text
        content: String,
    },

    /// A start tag was still open at end of file
    UnclosedTag {
        /// Start tag name as written
        tag: String,
        /// Line the tag was opened on
        line: usize,
    },
}

impl Defect {
    /// Short identifier of the defect class
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnmatchedEndTag { .. } => "unmatched_end_tag",
            Self::MismatchedTag { .. } => "mismatched_tag",
            Self::UnclosedTag { .. } => "unclosed_tag",
        }
    }

    /// Line the defect is reported against
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnmatchedEndTag { line, .. }
            | Self::MismatchedTag { line, .. }
            | Self::UnclosedTag { line, .. } => *line,
        }
    }

    /// Human-readable diagnostic lines
    ///
    /// The first line is the headline; continuation lines are indented.
    #[must_use]
    pub fn message_lines(&self) -> Vec<String> {
        match self {
            Self::UnmatchedEndTag { tag, line, content } => vec![
                format!("Line {line}: closing tag </{tag}> has no matching opening tag"),
                format!("   Content: {content}"),
            ],
            Self::MismatchedTag {
                expected,
                opened_at,
                found,
                line,
                content,
            } => vec![
                format!("Line {line}: tag mismatch"),
                format!("   Expected: </{expected}> (opened on line {opened_at})"),
                format!("   Found: </{found}>"),
                format!("   Content: {content}"),
            ],
            Self::UnclosedTag { tag, line } => {
                vec![format!("<{tag}> opened on line {line} is never closed")]
            },
        }
    }
}

impl std::fmt::Display for Defect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message_lines().join("\n"))
    }
}

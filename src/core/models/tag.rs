//! Tag model
//!
//! An open tag is an entry on the checker's stack: a start tag that is
//! still waiting for its end tag.

use serde::{Deserialize, Serialize};

/// A start tag waiting to be closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTag {
    /// Tag name as written in the document
    pub name: String,

    /// 1-based line the start tag appeared on
    pub line: usize,
}

impl OpenTag {
    /// Create a new open tag entry
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }

    /// Whether an end tag with this name closes the entry
    ///
    /// Comparison ignores ASCII case, so `<DIV>` is closed by `</div>`.
    #[must_use]
    pub fn is_closed_by(&self, end_tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(end_tag)
    }
}

/// Whether a tag occurrence was a start tag or an end tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
        }
    }
}

/// A tag seen while scanning, recorded in scan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOccurrence {
    /// Start or end tag
    pub kind: TagKind,

    /// Tag name as written
    pub name: String,

    /// 1-based line number
    pub line: usize,

    /// Trimmed text of the line
    pub content: String,
}

impl TagOccurrence {
    /// Render the tag the way it appeared, minus attributes
    #[must_use]
    pub fn markup(&self) -> String {
        match self.kind {
            TagKind::Open => format!("<{}>", self.name),
            TagKind::Close => format!("</{}>", self.name),
        }
    }
}

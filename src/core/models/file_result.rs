//! Per-file check result

use serde::{Deserialize, Serialize};

use super::{Defect, TagOccurrence};

/// Everything the checker found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// True iff `defects` is non-empty
    pub has_error: bool,

    /// Defects in the order they were produced
    pub defects: Vec<Defect>,

    /// Human-readable diagnostic lines for all defects
    pub messages: Vec<String>,

    /// Every pushed start tag and every end tag, in scan order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<TagOccurrence>,

    /// Line of a code fence that was opened and never closed
    ///
    /// Everything after this line went unchecked. Not a defect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unterminated_fence: Option<usize>,
}

impl FileResult {
    /// Build a result from defects, deriving `has_error` and `messages`
    #[must_use]
    pub fn new(
        defects: Vec<Defect>,
        occurrences: Vec<TagOccurrence>,
        unterminated_fence: Option<usize>,
    ) -> Self {
        let messages = defects.iter().flat_map(Defect::message_lines).collect();
        Self {
            has_error: !defects.is_empty(),
            defects,
            messages,
            occurrences,
            unterminated_fence,
        }
    }

    /// Number of defects found
    #[must_use]
    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }
}

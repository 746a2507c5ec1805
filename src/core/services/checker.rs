//! Check service - HTML tag balance checking for Markdown text
//!
//! The checker is a fold over the lines of a document. [`CheckState`] holds
//! the open-tag stack and the code fence flag; each line is fed in order and
//! [`CheckState::finish`] turns whatever is left into a [`FileResult`].
//!
//! Two behaviors are kept on purpose because they shape the diagnostics:
//!
//! - The fence flag is a plain flip-flop. A file with an odd number of fence
//!   lines stays "inside" until the end and nothing after the last fence is
//!   checked. [`FileResult::unterminated_fence`] records where that began.
//! - A mismatched end tag does not pop the stack, so the same open tag is
//!   expected again by later end tags.

use crate::core::models::{Defect, FileResult, OpenTag, TagKind, TagOccurrence};

use super::scanner::TagScanner;

/// Marker that opens and closes a fenced code block
pub const FENCE_MARKER: &str = "```";

/// Byte order mark some editors put at the start of a file
const BOM: char = '\u{feff}';

/// Trim whitespace and byte order marks from both ends of a line
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Running state of a single document check
#[derive(Debug, Clone, Default)]
pub struct CheckState {
    stack: Vec<OpenTag>,
    in_fence: bool,
    fence_opened_at: Option<usize>,
    defects: Vec<Defect>,
    occurrences: Vec<TagOccurrence>,
}

impl CheckState {
    /// Whether the last fed line left the state inside a code fence
    #[must_use]
    pub const fn in_fence(&self) -> bool {
        self.in_fence
    }

    /// Tags currently open, innermost last
    #[must_use]
    pub fn open_tags(&self) -> &[OpenTag] {
        &self.stack
    }

    /// Process one line
    ///
    /// `number` is the 1-based line number, `line` the raw line text.
    pub fn feed_line(&mut self, scanner: &TagScanner, number: usize, line: &str) {
        let trimmed = trim_line(line);

        if trimmed.starts_with(FENCE_MARKER) {
            self.in_fence = !self.in_fence;
            self.fence_opened_at = self.in_fence.then_some(number);
            return;
        }

        if self.in_fence {
            return;
        }

        for name in scanner.start_tags(line) {
            self.stack.push(OpenTag::new(name, number));
            self.occurrences.push(TagOccurrence {
                kind: TagKind::Open,
                name: name.to_string(),
                line: number,
                content: trimmed.to_string(),
            });
        }

        for name in scanner.end_tags(line) {
            self.close(name, number, trimmed);
        }
    }

    fn close(&mut self, name: &str, number: usize, content: &str) {
        match self.stack.last() {
            None => self.defects.push(Defect::UnmatchedEndTag {
                tag: name.to_string(),
                line: number,
                content: content.to_string(),
            }),
            Some(top) if top.is_closed_by(name) => {
                self.stack.pop();
            },
            Some(top) => {
                let defect = Defect::MismatchedTag {
                    expected: top.name.clone(),
                    opened_at: top.line,
                    found: name.to_string(),
                    line: number,
                    content: content.to_string(),
                };
                self.defects.push(defect);
            },
        }

        self.occurrences.push(TagOccurrence {
            kind: TagKind::Close,
            name: name.to_string(),
            line: number,
            content: content.to_string(),
        });
    }

    /// Report remaining open tags and produce the result
    #[must_use]
    pub fn finish(self) -> FileResult {
        let Self {
            stack,
            in_fence,
            fence_opened_at,
            mut defects,
            occurrences,
        } = self;

        defects.extend(stack.into_iter().map(|open| Defect::UnclosedTag {
            tag: open.name,
            line: open.line,
        }));

        let unterminated_fence = if in_fence { fence_opened_at } else { None };
        FileResult::new(defects, occurrences, unterminated_fence)
    }
}

/// Tag balance checker with a configured scanner
#[derive(Debug, Clone, Default)]
pub struct Checker {
    scanner: TagScanner,
}

impl Checker {
    /// Create a checker using the given scanner
    #[must_use]
    pub const fn new(scanner: TagScanner) -> Self {
        Self { scanner }
    }

    /// The scanner this checker uses
    #[must_use]
    pub const fn scanner(&self) -> &TagScanner {
        &self.scanner
    }

    /// Check the full text of one Markdown document
    ///
    /// Never fails. Lines are split on `\n`; a trailing `\r` or a leading
    /// byte order mark is removed by trimming before fence detection and
    /// diagnostics.
    #[must_use]
    pub fn check(&self, text: &str) -> FileResult {
        let mut state = CheckState::default();
        for (index, line) in text.split('\n').enumerate() {
            state.feed_line(&self.scanner, index + 1, line);
        }
        state.finish()
    }
}

/// Check a document with the default void tag set
#[must_use]
pub fn check_text(text: &str) -> FileResult {
    Checker::default().check(text)
}

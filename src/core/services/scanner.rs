//! Tag scanner - lexical extraction of HTML tags from a single line
//!
//! Start tags are `<name ...>` where everything between the name and the
//! next `>` is ignored. End tags are `</name>`. Names are ASCII word
//! characters.

use std::sync::LazyLock;

use regex::Regex;

/// Void elements that never take an end tag
pub const DEFAULT_VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

static START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z0-9_]+)[^>]*>").expect("start tag pattern is valid"));

static END_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</([A-Za-z0-9_]+)>").expect("end tag pattern is valid"));

/// Extracts start and end tag names from a line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScanner {
    /// Lowercased names of tags that are never pushed
    void_tags: Vec<String>,
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::with_void_tags(DEFAULT_VOID_TAGS)
    }
}

impl TagScanner {
    /// Create a scanner with a custom void tag set
    #[must_use]
    pub fn with_void_tags<S: AsRef<str>>(void_tags: &[S]) -> Self {
        Self {
            void_tags: void_tags.iter().map(|t| t.as_ref().to_ascii_lowercase()).collect(),
        }
    }

    /// Void tag names this scanner skips
    #[must_use]
    pub fn void_tags(&self) -> &[String] {
        &self.void_tags
    }

    /// Whether a start tag with this name is a void element
    #[must_use]
    pub fn is_void(&self, name: &str) -> bool {
        self.void_tags.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    /// Names of non-void start tags on the line, left to right
    pub fn start_tags<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        START_TAG
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !self.is_void(name))
    }

    /// Names of end tags on the line, left to right
    pub fn end_tags<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        END_TAG.captures_iter(line).filter_map(|caps| caps.get(1)).map(|m| m.as_str())
    }
}

//! Business logic services
//!
//! Pure logic that operates on text passed in and returns results.
//! Nothing here touches the filesystem.
//!
//! - [`scanner`] - Extract start and end tags from a line
//! - [`checker`] - Fold lines into a tag balance result

pub mod checker;
pub mod scanner;

pub use checker::{CheckState, Checker, FENCE_MARKER, check_text};
pub use scanner::{DEFAULT_VOID_TAGS, TagScanner};

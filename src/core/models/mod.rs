//! Domain models for tagcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`OpenTag`] - A start tag waiting for its end tag
//! - [`TagOccurrence`] - A tag seen while scanning
//! - [`Defect`] - A nesting problem found in a document
//! - [`FileResult`] - Everything found in one document

mod defect;
mod file_result;
mod tag;

pub use defect::Defect;
pub use file_result::FileResult;
pub use tag::{OpenTag, TagKind, TagOccurrence};

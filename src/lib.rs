//! tagcheck - Find unbalanced HTML tags in Markdown notes
//!
//! The core of this library is a pure checker that folds the lines of a
//! Markdown document into a list of tag nesting defects, ignoring anything
//! inside fenced code blocks. Around it sit file discovery, configuration
//! and output rendering used by the `tagcheck` binary.
//!
//! # Examples
//!
//! ```
//! use tagcheck::core::models::Defect;
//! use tagcheck::core::services::check_text;
//!
//! let result = check_text("<div>\n<span>text</div>\n");
//! assert!(result.has_error);
//! assert!(matches!(result.defects[0], Defect::MismatchedTag { .. }));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod discovery;
pub mod output;

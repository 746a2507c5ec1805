//! Core domain logic for tagcheck
//!
//! This module contains pure logic with no I/O dependencies. Reading files
//! and deciding which files to check live in [`crate::discovery`].
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`OpenTag`, `Defect`, `FileResult`)
//! - `services/` - The tag scanner and the balance checker

pub mod models;
pub mod services;

//! Rust model of the OpenXR XML registry.
//!
//! Only the registry sections the workspace generators consume are modeled:
//! vendor tags, core feature levels, the `XrStructureType` enum block,
//! extension declarations and interaction profiles. Everything else in the
//! document is skipped.
//!
//! Parsing is lenient: malformed rows are recorded as [`Error`] values and
//! skipped, and only I/O failures, broken XML or a missing `<registry>` root
//! abort with a [`FatalError`].

mod parse;
mod types;

pub use parse::{parse_file, parse_stream};
pub use types::*;

//! Use case orchestration for hookcheck.
//!
//! This crate coordinates the yaml and domain layers around the external
//! linter: read the manifest, extract entries, lint each entry against a
//! scoped temp file, remap the diagnostics, and aggregate the verdict.
//!
//! The CLI crate depends on this; it only handles argument parsing and the
//! final stdout/stderr/exit-code I/O.

#![forbid(unsafe_code)]

mod check;
mod error;

pub use check::{run_check, CheckInput, CheckOutput};
pub use error::FatalError;

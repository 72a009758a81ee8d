//! Pure hookcheck logic (no IO).
//!
//! Input: an annotated YAML document and raw linter output.
//! Output: extracted hook entries and remapped diagnostic text + verdict.

#![forbid(unsafe_code)]

mod extract;
mod remap;

pub use extract::{find_entries, ExtractError};
pub use remap::remap;

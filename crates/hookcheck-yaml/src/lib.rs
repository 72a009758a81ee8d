//! Line-annotated YAML parsing.
//!
//! Parses a YAML document into a generic tree of mappings/sequences/scalars
//! while recording, for every mapping key, the 1-based source line on which
//! that key was declared. Downstream code asks "on what line was key K
//! declared in mapping M" via [`Mapping::key_line`].
//!
//! Built on the `yaml-rust2` marked event stream so line numbers come from
//! the scanner itself rather than from re-scanning the source text.

#![forbid(unsafe_code)]

mod compose;
mod node;

pub use node::{MapEntry, Mapping, YamlNode};

use compose::LineComposer;
use yaml_rust2::parser::Parser;

/// Error type for parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The input could not be tokenized/parsed as YAML.
    #[error("not a YAML file: {0}")]
    NotYaml(String),
}

/// Parse a YAML document with per-key line annotations.
///
/// Returns `Ok(None)` for an empty document: an empty file, or a document
/// containing only `null`.
pub fn parse(text: &str) -> Result<Option<YamlNode>, ParseError> {
    let mut parser = Parser::new_from_str(text);
    let mut composer = LineComposer::default();
    parser
        .load(&mut composer, false)
        .map_err(|err| ParseError::NotYaml(err.to_string()))?;

    Ok(match composer.into_document() {
        None | Some(YamlNode::Null) => None,
        doc => doc,
    })
}

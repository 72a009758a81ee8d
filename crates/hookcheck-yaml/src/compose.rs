//! Event-stream composer that attaches key line numbers while building the
//! value tree.

use crate::node::{MapEntry, Mapping, YamlNode};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Composes marked parser events into a [`YamlNode`] tree.
///
/// Containers are built on a stack; when a scalar arrives in key position its
/// marker line is remembered and attached to the mapping entry once the value
/// has been composed.
#[derive(Default)]
pub(crate) struct LineComposer {
    stack: Vec<Frame>,
    doc: Option<YamlNode>,
}

enum Frame {
    Sequence {
        items: Vec<YamlNode>,
        line: u32,
    },
    Mapping {
        entries: Vec<MapEntry>,
        pending_key: Option<(String, u32)>,
        line: u32,
    },
}

impl MarkedEventReceiver for LineComposer {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        let line = mark.line() as u32;
        match ev {
            Event::Scalar(value, style, _aid, tag) => {
                let node = resolve_scalar(value, style, tag.as_ref());
                self.emit(node, line);
            }
            Event::SequenceStart(_aid, _tag) => {
                self.stack.push(Frame::Sequence {
                    items: Vec::new(),
                    line,
                });
            }
            Event::SequenceEnd => {
                if let Some(Frame::Sequence { items, line }) = self.stack.pop() {
                    self.emit(YamlNode::Sequence(items), line);
                }
            }
            Event::MappingStart(_aid, _tag) => {
                self.stack.push(Frame::Mapping {
                    entries: Vec::new(),
                    pending_key: None,
                    line,
                });
            }
            Event::MappingEnd => {
                if let Some(Frame::Mapping { entries, line, .. }) = self.stack.pop() {
                    self.emit(YamlNode::Mapping(Mapping::from_entries(entries)), line);
                }
            }
            // Anchors/aliases are not resolved; pre-commit manifests do not
            // use them and the downstream schema walk rejects the result.
            Event::Alias(_) => self.emit(YamlNode::Null, line),
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}
        }
    }
}

impl LineComposer {
    fn emit(&mut self, node: YamlNode, line: u32) {
        match self.stack.last_mut() {
            None => self.doc = Some(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                // Key position: remember the key text and its line.
                None => *pending_key = Some((key_string(&node), line)),
                Some((key, key_line)) => entries.push(MapEntry {
                    key,
                    key_line,
                    value: node,
                }),
            },
        }
    }

    pub(crate) fn into_document(self) -> Option<YamlNode> {
        self.doc
    }
}

/// Resolve an untagged plain scalar into null/bool/integer; everything else
/// stays a string. Quoted and block scalars are always strings.
fn resolve_scalar(value: String, style: TScalarStyle, tag: Option<&Tag>) -> YamlNode {
    if style != TScalarStyle::Plain || tag.is_some() {
        return YamlNode::String(value);
    }
    match value.as_str() {
        "" | "~" | "null" | "Null" | "NULL" => YamlNode::Null,
        "true" | "True" | "TRUE" => YamlNode::Bool(true),
        "false" | "False" | "FALSE" => YamlNode::Bool(false),
        _ => match value.parse::<i64>() {
            Ok(n) => YamlNode::Integer(n),
            Err(_) => YamlNode::String(value),
        },
    }
}

/// Mapping keys in the hookcheck schema are scalars; containers in key
/// position are preserved under a placeholder name.
fn key_string(node: &YamlNode) -> String {
    match node.scalar_string() {
        Some(s) => s,
        None => "<non-scalar key>".to_string(),
    }
}

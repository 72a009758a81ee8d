//! The annotated YAML value tree.

/// A parsed YAML value.
///
/// Mappings carry, per key, the 1-based line the key was declared on. This is
/// an explicit parallel annotation rather than synthetic companion keys, so
/// it cannot collide with genuine document keys.
#[derive(Clone, Debug, PartialEq)]
pub enum YamlNode {
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    Sequence(Vec<YamlNode>),
    Mapping(Mapping),
}

impl YamlNode {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            YamlNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match self {
            YamlNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            YamlNode::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Render a scalar node as text. Containers have no scalar rendering.
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            YamlNode::Null => Some(String::new()),
            YamlNode::Bool(b) => Some(b.to_string()),
            YamlNode::Integer(i) => Some(i.to_string()),
            YamlNode::String(s) => Some(s.clone()),
            YamlNode::Sequence(_) | YamlNode::Mapping(_) => None,
        }
    }
}

/// One key/value pair of a mapping, with the key's declaration line.
#[derive(Clone, Debug, PartialEq)]
pub struct MapEntry {
    pub key: String,
    /// 1-based source line of the key token.
    pub key_line: u32,
    pub value: YamlNode,
}

/// An ordered YAML mapping with per-key line annotations.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<MapEntry>,
}

impl Mapping {
    pub(crate) fn from_entries(entries: Vec<MapEntry>) -> Self {
        Self { entries }
    }

    /// Value declared under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// 1-based line on which `key` was declared, if present.
    pub fn key_line(&self, key: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.key_line)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

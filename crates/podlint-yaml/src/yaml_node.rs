//! YAML tree with source location tracking.

use crate::SourceInfo;

/// The result of parsing a YAML stream.
///
/// `root` is `None` when the stream holds no document at all (empty input,
/// or only comments).
#[derive(Debug, Clone, Default)]
pub struct YamlDocument {
    /// The top-level node of the first document.
    pub root: Option<YamlNode>,
}

impl YamlDocument {
    /// Create a document around a root node.
    pub fn new(root: YamlNode) -> Self {
        Self { root: Some(root) }
    }

    /// Create a document with no content.
    pub fn empty() -> Self {
        Self { root: None }
    }
}

/// How a scalar resolved from its tag, quoting style and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// Quoted scalars, `!!str`, and plain text that is not another type
    String,
    /// Integer literals and `!!int`
    Int,
    /// Null, booleans, floats, timestamps, custom tags and aliases
    Other,
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    /// Scalar text as written (after unquoting)
    pub value: String,
    pub scalar_type: ScalarType,
}

/// Structural kind of a node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Scalar(Scalar),
    Sequence(Vec<YamlNode>),
    /// Entries in document order.
    Mapping(Vec<YamlHashEntry>),
}

/// A YAML value with source location information.
///
/// Every node, including every mapping key, carries the [`SourceInfo`] of
/// the position where it begins.
#[derive(Debug, Clone)]
pub struct YamlNode {
    /// Source location for this node.
    pub source_info: SourceInfo,

    kind: NodeKind,
}

/// A key-value pair in a YAML mapping with source tracking.
#[derive(Debug, Clone)]
pub struct YamlHashEntry {
    /// The key with source tracking
    pub key: YamlNode,

    /// The value with source tracking
    pub value: YamlNode,
}

impl YamlNode {
    /// Create a scalar node.
    pub fn new_scalar(
        value: impl Into<String>,
        scalar_type: ScalarType,
        source_info: SourceInfo,
    ) -> Self {
        Self {
            source_info,
            kind: NodeKind::Scalar(Scalar {
                value: value.into(),
                scalar_type,
            }),
        }
    }

    /// Create a sequence node.
    pub fn new_sequence(source_info: SourceInfo, items: Vec<YamlNode>) -> Self {
        Self {
            source_info,
            kind: NodeKind::Sequence(items),
        }
    }

    /// Create a mapping node.
    pub fn new_mapping(source_info: SourceInfo, entries: Vec<YamlHashEntry>) -> Self {
        Self {
            source_info,
            kind: NodeKind::Mapping(entries),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// 1-based line on which this node begins.
    pub fn line(&self) -> usize {
        self.source_info.line
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, NodeKind::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, NodeKind::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, NodeKind::Mapping(_))
    }

    /// Get the scalar payload if this is a scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match &self.kind {
            NodeKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Get the scalar text if this is a scalar resolved as a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Scalar(Scalar {
                value,
                scalar_type: ScalarType::String,
            }) => Some(value),
            _ => None,
        }
    }

    /// Get the sequence items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match &self.kind {
            NodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the mapping entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[YamlHashEntry]> {
        match &self.kind {
            NodeKind::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Find a mapping entry by key.
    ///
    /// Keys are compared by their scalar text whatever type they resolved
    /// to. The first matching entry wins when a key is repeated. Returns
    /// `None` if this is not a mapping or the key is absent.
    pub fn get_entry(&self, key: &str) -> Option<&YamlHashEntry> {
        self.as_mapping()?.iter().find(|entry| {
            entry
                .key
                .as_scalar()
                .is_some_and(|scalar| scalar.value == key)
        })
    }

    /// Get a value from a mapping by key. See [`YamlNode::get_entry`].
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Scalar(_) => 0,
            NodeKind::Sequence(items) => items.len(),
            NodeKind::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl YamlHashEntry {
    pub fn new(key: YamlNode, value: YamlNode) -> Self {
        Self { key, value }
    }
}

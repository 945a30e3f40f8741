//! YAML parser that builds YamlNode trees.

use crate::scalar::resolve_plain_scalar;
use crate::source_info::LineIndex;
use crate::{Error, Result, ScalarType, SourceInfo, YamlDocument, YamlHashEntry, YamlNode};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Handle of the YAML core schema tags (`!!str`, `!!int`, ...).
const CORE_TAG_HANDLE: &str = "tag:yaml.org,2002:";

/// Parse YAML from a string.
///
/// Only the first document of the stream is read. Input without any
/// document yields a [`YamlDocument`] whose root is `None`.
///
/// # Example
///
/// ```rust
/// use podlint_yaml::parse;
///
/// let doc = parse("kind: Pod").unwrap();
/// assert!(doc.root.unwrap().is_mapping());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the YAML is syntactically invalid.
pub fn parse(content: &str) -> Result<YamlDocument> {
    parse_impl(content, None)
}

/// Parse YAML from a string with an associated filename.
///
/// The filename is recorded in every node's [`SourceInfo`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the YAML is syntactically invalid.
pub fn parse_file(content: &str, filename: &str) -> Result<YamlDocument> {
    parse_impl(content, Some(filename))
}

fn parse_impl(content: &str, filename: Option<&str>) -> Result<YamlDocument> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = YamlBuilder::new(content, filename);

    parser.load(&mut builder, false).map_err(|err| {
        let (line, col) = builder.lines.locate(err.marker().index());
        Error::Parse {
            message: err.info().to_string(),
            line,
            col,
        }
    })?;

    let document = builder.finish();
    tracing::debug!(
        file = filename.unwrap_or("<string>"),
        empty = document.root.is_none(),
        "parsed YAML document"
    );
    Ok(document)
}

/// Receives parser events and assembles the node tree.
struct YamlBuilder {
    lines: LineIndex,

    /// Optional filename for source info
    filename: Option<String>,

    /// Stack of collections being constructed
    stack: Vec<BuildNode>,

    /// The completed root node
    root: Option<YamlNode>,
}

/// A collection being constructed during parsing.
enum BuildNode {
    Sequence {
        start_marker: Marker,
        items: Vec<YamlNode>,
    },
    Mapping {
        start_marker: Marker,
        entries: Vec<(YamlNode, Option<YamlNode>)>,
    },
}

impl YamlBuilder {
    fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            lines: LineIndex::new(source),
            filename: filename.map(str::to_string),
            stack: Vec::new(),
            root: None,
        }
    }

    fn finish(self) -> YamlDocument {
        self.root.map_or_else(YamlDocument::empty, YamlDocument::new)
    }

    fn push_complete(&mut self, node: YamlNode) {
        match self.stack.last_mut() {
            None => {
                // Single-document mode: keep the first root only.
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(BuildNode::Sequence { items, .. }) => items.push(node),
            Some(BuildNode::Mapping { entries, .. }) => match entries.last_mut() {
                Some((_, value @ None)) => *value = Some(node),
                _ => entries.push((node, None)),
            },
        }
    }

    fn source_info_at(&self, offset: usize, len: usize) -> SourceInfo {
        let (line, col) = self.lines.locate(offset);
        SourceInfo::new(self.filename.clone(), offset, line, col, len)
    }

    fn finish_mapping(
        &self,
        start_marker: Marker,
        end_marker: Marker,
        entries: Vec<(YamlNode, Option<YamlNode>)>,
    ) -> YamlNode {
        let len = end_marker.index().saturating_sub(start_marker.index());
        let source_info = self.source_info_at(start_marker.index(), len);

        let hash_entries = entries
            .into_iter()
            .filter_map(|(key, value)| Some(YamlHashEntry::new(key, value?)))
            .collect();

        YamlNode::new_mapping(source_info, hash_entries)
    }
}

impl MarkedEventReceiver for YamlBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, style, _anchor_id, tag) => {
                let scalar_type = classify_scalar(&value, style, tag.as_ref());
                let source_info = self.source_info_at(marker.index(), value.chars().count());
                let node = YamlNode::new_scalar(value, scalar_type, source_info);
                self.push_complete(node);
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Sequence {
                    start_marker: marker,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                if let Some(BuildNode::Sequence {
                    start_marker,
                    items,
                }) = self.stack.pop()
                {
                    let len = marker.index().saturating_sub(start_marker.index());
                    let source_info = self.source_info_at(start_marker.index(), len);
                    let node = YamlNode::new_sequence(source_info, items);
                    self.push_complete(node);
                }
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    start_marker: marker,
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => {
                if let Some(BuildNode::Mapping {
                    start_marker,
                    entries,
                }) = self.stack.pop()
                {
                    let node = self.finish_mapping(start_marker, marker, entries);
                    self.push_complete(node);
                }
            }

            Event::Alias(_anchor_id) => {
                // Aliases are not expanded; they never satisfy a typed check.
                let source_info = self.source_info_at(marker.index(), 0);
                let node = YamlNode::new_scalar("", ScalarType::Other, source_info);
                self.push_complete(node);
            }
        }
    }
}

fn is_core_handle(handle: &str) -> bool {
    handle == CORE_TAG_HANDLE || handle == "!!"
}

/// Decide the type of a scalar from its tag, quoting style and text.
fn classify_scalar(value: &str, style: TScalarStyle, tag: Option<&Tag>) -> ScalarType {
    if let Some(tag) = tag {
        if !is_core_handle(&tag.handle) {
            return ScalarType::Other;
        }
        return match tag.suffix.as_str() {
            "str" => ScalarType::String,
            "int" => ScalarType::Int,
            _ => ScalarType::Other,
        };
    }

    if matches!(style, TScalarStyle::Plain) {
        resolve_plain_scalar(value)
    } else {
        ScalarType::String
    }
}

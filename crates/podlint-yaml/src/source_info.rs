//! Source location information for YAML nodes.

use serde::{Deserialize, Serialize};

/// Source location information for a YAML node.
///
/// Tracks where a YAML element begins in the original source text so that
/// diagnostics can point at a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Optional filename or source identifier
    pub file: Option<String>,

    /// Character offset from start of source (0-based)
    pub offset: usize,

    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based, in characters)
    pub col: usize,

    /// Length in characters
    pub len: usize,
}

impl SourceInfo {
    /// Create a new SourceInfo with all fields specified.
    pub fn new(file: Option<String>, offset: usize, line: usize, col: usize, len: usize) -> Self {
        Self {
            file,
            offset,
            line,
            col,
            len,
        }
    }

}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            file: None,
            offset: 0,
            line: 1,
            col: 1,
            len: 0,
        }
    }
}

/// Maps character offsets to 1-based line/column pairs.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    /// Character offset at which each line starts.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, ch) in content.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(idx + 1);
            }
        }
        Self { line_starts }
    }

    /// Returns the 1-based (line, column) for a character offset.
    pub(crate) fn locate(&self, offset: usize) -> (usize, usize) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let col = offset - self.line_starts[line_idx] + 1;
        (line_idx + 1, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_info_creation() {
        let info = SourceInfo::new(Some("pod.yaml".into()), 10, 2, 5, 8);
        assert_eq!(info.file, Some("pod.yaml".into()));
        assert_eq!(info.offset, 10);
        assert_eq!(info.line, 2);
        assert_eq!(info.col, 5);
        assert_eq!(info.len, 8);
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.locate(0), (1, 1));
        assert_eq!(index.locate(1), (1, 2));
        assert_eq!(index.locate(3), (2, 1));
        assert_eq!(index.locate(4), (2, 2));
        assert_eq!(index.locate(6), (3, 1));
        assert_eq!(index.locate(7), (4, 1));
        assert_eq!(index.locate(8), (4, 2));
    }

    #[test]
    fn test_line_index_counts_chars_not_bytes() {
        let index = LineIndex::new("é\nx");
        assert_eq!(index.locate(2), (2, 1));
    }
}

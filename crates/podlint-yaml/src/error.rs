//! Error types for YAML parsing.

use thiserror::Error;

/// Result type alias for podlint-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during YAML parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    #[error("{message} at line {line}, column {col}")]
    Parse {
        message: String,
        /// 1-based line of the offending token
        line: usize,
        /// 1-based column of the offending token
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = Error::Parse {
            message: "did not find expected key".into(),
            line: 3,
            col: 5,
        };
        assert_eq!(
            err.to_string(),
            "did not find expected key at line 3, column 5"
        );
    }
}

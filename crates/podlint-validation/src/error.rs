// Diagnostic types for Pod validation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind a field value is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedKind {
    String,
    Int,
    Object,
    Array,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpectedKind::String => "string",
            ExpectedKind::Int => "int",
            ExpectedKind::Object => "object",
            ExpectedKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Structured validation error kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// The input holds no document
    MissingDocument,

    /// The top-level node is not a mapping
    DocumentNotObject,

    /// A required field is absent
    MissingRequiredField { field: String },

    /// A required string field is present but empty.
    ///
    /// Reported with the same wording as an absent field.
    EmptyRequiredField { field: String },

    /// A field has the wrong kind
    TypeMismatch { field: String, expected: ExpectedKind },

    /// A string field holds a value outside its allowed set
    UnsupportedValue { field: String, value: String },

    /// A string field does not have the required shape
    InvalidFormat { field: String, value: String },

    /// An integer field is outside its allowed range
    ValueOutOfRange { field: String },

    /// A sequence element is not a mapping
    ElementNotObject { element: String },
}

impl ValidationErrorKind {
    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingDocument => "P-1-1",
            ValidationErrorKind::DocumentNotObject => "P-1-2",
            ValidationErrorKind::MissingRequiredField { .. }
            | ValidationErrorKind::EmptyRequiredField { .. } => "P-1-10",
            ValidationErrorKind::TypeMismatch { .. } => "P-1-11",
            ValidationErrorKind::UnsupportedValue { .. } => "P-1-12",
            ValidationErrorKind::InvalidFormat { .. } => "P-1-14",
            ValidationErrorKind::ValueOutOfRange { .. } => "P-1-15",
            ValidationErrorKind::ElementNotObject { .. } => "P-1-16",
        }
    }

    /// Format a human-readable message from this error kind
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::MissingDocument => "document is required".to_string(),
            ValidationErrorKind::DocumentNotObject => "document must be object".to_string(),
            ValidationErrorKind::MissingRequiredField { field }
            | ValidationErrorKind::EmptyRequiredField { field } => {
                format!("{} is required", field)
            }
            ValidationErrorKind::TypeMismatch { field, expected } => {
                format!("{} must be {}", field, expected)
            }
            ValidationErrorKind::UnsupportedValue { field, value } => {
                format!("{} has unsupported value '{}'", field, value)
            }
            ValidationErrorKind::InvalidFormat { field, value } => {
                format!("{} has invalid format '{}'", field, value)
            }
            ValidationErrorKind::ValueOutOfRange { field } => {
                format!("{} value out of range", field)
            }
            ValidationErrorKind::ElementNotObject { element } => {
                format!("{} must be object", element)
            }
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    /// The structured error kind
    pub kind: ValidationErrorKind,
    /// Line of the offending key or element; `None` when the error has no
    /// location (missing fields, missing document).
    pub line: Option<usize>,
    /// Where in the document the error applies (e.g. `spec.containers[0]`)
    pub instance_path: InstancePath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.kind.message()),
            None => write!(f, "{}", self.kind.message()),
        }
    }
}

impl ValidationError {
    /// Create a new validation error with a structured kind
    pub fn new(kind: ValidationErrorKind, line: Option<usize>) -> Self {
        Self {
            kind,
            line,
            instance_path: InstancePath::new(),
        }
    }

    /// Set the instance path for this error
    pub fn with_instance_path(mut self, instance_path: InstancePath) -> Self {
        self.instance_path = instance_path;
        self
    }

    /// Get the human-readable message for this error
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}

/// Instance path (e.g., ["spec", "containers", 0])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Key(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// A segment in an instance path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

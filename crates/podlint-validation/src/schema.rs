//! Schema description types.
//!
//! A schema is plain data: an [`ObjectSchema`] lists its fields in the
//! order they are checked, and each [`FieldSchema`] says whether the field
//! is required, what kind of value it holds, and which rule the value must
//! satisfy. All of it is `const`-constructible so the Pod schema lives in
//! statics (see [`crate::pod`]).

use crate::error::ExpectedKind;

/// Fields of a mapping, in check order.
#[derive(Debug)]
pub struct ObjectSchema {
    pub fields: &'static [FieldSchema],
}

/// One field of an object.
#[derive(Debug)]
pub struct FieldSchema {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    /// Stop checking the remaining fields of the enclosing object when this
    /// field is missing or has the wrong kind.
    pub halts_on_failure: bool,
}

/// Expected kind of a field value, with its value rule or nested schema.
#[derive(Debug)]
pub enum FieldKind {
    String(StringRule),
    Int(IntRule),
    /// A mapping; `None` accepts any contents.
    Object(Option<&'static ObjectSchema>),
    /// A sequence whose elements must be mappings of `items`.
    ///
    /// `element` names a single element in diagnostics.
    Array {
        element: &'static str,
        items: &'static ObjectSchema,
    },
}

/// Constraint on a string value.
#[derive(Debug)]
pub enum StringRule {
    Any,
    /// Must not be empty. Reported with the "is required" wording.
    NonEmpty,
    /// Must be one of the listed values.
    OneOf(&'static [&'static str]),
    /// Must satisfy the predicate.
    Format(fn(&str) -> bool),
}

/// Constraint on an integer value.
#[derive(Debug)]
pub enum IntRule {
    Any,
    /// Inclusive bounds.
    Range { min: i64, max: i64 },
}

impl FieldKind {
    pub fn expected(&self) -> ExpectedKind {
        match self {
            FieldKind::String(_) => ExpectedKind::String,
            FieldKind::Int(_) => ExpectedKind::Int,
            FieldKind::Object(_) => ExpectedKind::Object,
            FieldKind::Array { .. } => ExpectedKind::Array,
        }
    }
}

impl FieldSchema {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
            halts_on_failure: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
            halts_on_failure: false,
        }
    }

    pub const fn halting(mut self) -> Self {
        self.halts_on_failure = true;
        self
    }
}

impl ObjectSchema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }
}

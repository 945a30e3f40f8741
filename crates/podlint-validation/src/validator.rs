// Schema-driven validation walker

use crate::error::{InstancePath, PathSegment, ValidationError, ValidationErrorKind};
use crate::pod::POD;
use crate::schema::{FieldKind, FieldSchema, IntRule, ObjectSchema, StringRule};
use podlint_yaml::{parse_int_literal, ScalarType, YamlDocument, YamlHashEntry, YamlNode};

/// Validate a parsed document against the Pod schema.
///
/// Returns every violation found, in the order the checks ran. An empty
/// list means the document is valid.
pub fn validate_pod(document: &YamlDocument) -> Vec<ValidationError> {
    validate_document(document, &POD)
}

/// Validate a parsed document against an object schema.
///
/// A missing document or a non-mapping root produces a single error and
/// nothing else is checked.
pub fn validate_document(document: &YamlDocument, schema: &ObjectSchema) -> Vec<ValidationError> {
    let mut context = ValidationContext::new();

    match &document.root {
        None => context.add_error(ValidationErrorKind::MissingDocument, None),
        Some(root) if !root.is_mapping() => {
            context.add_error(ValidationErrorKind::DocumentNotObject, Some(root.line()))
        }
        Some(root) => validate_object(root, schema, &mut context),
    }

    tracing::debug!(errors = context.errors().len(), "validation finished");
    context.into_errors()
}

/// Validation context tracks state during validation
pub struct ValidationContext {
    /// Current instance path (e.g., ["spec", "containers", 0])
    instance_path: InstancePath,
    /// Collected validation errors
    errors: Vec<ValidationError>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self {
            instance_path: InstancePath::new(),
            errors: Vec::new(),
        }
    }

    /// Record an error at the current instance path
    pub fn add_error(&mut self, kind: ValidationErrorKind, line: Option<usize>) {
        let error = ValidationError::new(kind, line).with_instance_path(self.instance_path.clone());
        self.errors.push(error);
    }

    /// Execute a function with a new instance path segment
    pub fn with_instance_path<F, R>(&mut self, segment: PathSegment, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        match segment {
            PathSegment::Key(key) => self.instance_path.push_key(key),
            PathSegment::Index(index) => self.instance_path.push_index(index),
        }
        let result = f(self);
        self.instance_path.pop();
        result
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Locate a field in a mapping, returning its key and value nodes.
///
/// Returns `None` when `node` is not a mapping or has no such key. The
/// first entry wins if the key is repeated.
pub fn get_field<'a>(node: &'a YamlNode, name: &str) -> Option<&'a YamlHashEntry> {
    node.get_entry(name)
}

/// True iff `node` is a scalar resolved as a string.
pub fn is_string(node: &YamlNode) -> bool {
    node.as_scalar()
        .is_some_and(|scalar| scalar.scalar_type == ScalarType::String)
}

/// True iff `node` is a scalar resolved as an integer.
pub fn is_int(node: &YamlNode) -> bool {
    node.as_scalar()
        .is_some_and(|scalar| scalar.scalar_type == ScalarType::Int)
}

/// Check every field of `schema` against the mapping `node`.
fn validate_object(node: &YamlNode, schema: &ObjectSchema, context: &mut ValidationContext) {
    for field in schema.fields {
        let usable = validate_field(node, field, context);
        if !usable && field.halts_on_failure {
            break;
        }
    }
}

/// Check one field. Returns false if the field is required and missing, or
/// present with the wrong kind.
fn validate_field(node: &YamlNode, field: &FieldSchema, context: &mut ValidationContext) -> bool {
    let Some(entry) = get_field(node, field.name) else {
        if field.required {
            context.add_error(
                ValidationErrorKind::MissingRequiredField {
                    field: field.name.to_string(),
                },
                None,
            );
            return false;
        }
        return true;
    };

    context.with_instance_path(PathSegment::Key(field.name.to_string()), |ctx| {
        validate_value(field, entry, ctx)
    })
}

fn validate_value(field: &FieldSchema, entry: &YamlHashEntry, context: &mut ValidationContext) -> bool {
    let line = Some(entry.key.line());
    let value = &entry.value;

    let type_ok = match &field.kind {
        FieldKind::String(_) => is_string(value),
        FieldKind::Int(_) => is_int(value),
        FieldKind::Object(_) => value.is_mapping(),
        FieldKind::Array { .. } => value.is_sequence(),
    };
    if !type_ok {
        context.add_error(
            ValidationErrorKind::TypeMismatch {
                field: field.name.to_string(),
                expected: field.kind.expected(),
            },
            line,
        );
        return false;
    }

    match &field.kind {
        FieldKind::String(rule) => {
            if let Some(text) = value.as_str() {
                check_string(field.name, text, rule, line, context);
            }
        }
        FieldKind::Int(rule) => {
            if let Some(scalar) = value.as_scalar() {
                check_int(field.name, &scalar.value, rule, line, context);
            }
        }
        FieldKind::Object(Some(nested)) => validate_object(value, nested, context),
        FieldKind::Object(None) => {}
        FieldKind::Array { element, items } => {
            validate_elements(value.as_sequence().unwrap_or_default(), element, items, context)
        }
    }

    true
}

fn validate_elements(
    elements: &[YamlNode],
    element: &str,
    items: &ObjectSchema,
    context: &mut ValidationContext,
) {
    for (index, item) in elements.iter().enumerate() {
        context.with_instance_path(PathSegment::Index(index), |ctx| {
            if item.is_mapping() {
                validate_object(item, items, ctx);
            } else {
                ctx.add_error(
                    ValidationErrorKind::ElementNotObject {
                        element: element.to_string(),
                    },
                    Some(item.line()),
                );
            }
        });
    }
}

fn check_string(
    name: &str,
    value: &str,
    rule: &StringRule,
    line: Option<usize>,
    context: &mut ValidationContext,
) {
    let kind = match rule {
        StringRule::Any => return,
        StringRule::NonEmpty if value.is_empty() => ValidationErrorKind::EmptyRequiredField {
            field: name.to_string(),
        },
        StringRule::OneOf(allowed) if !allowed.iter().any(|candidate| *candidate == value) => {
            ValidationErrorKind::UnsupportedValue {
                field: name.to_string(),
                value: value.to_string(),
            }
        }
        StringRule::Format(predicate) if !predicate(value) => ValidationErrorKind::InvalidFormat {
            field: name.to_string(),
            value: value.to_string(),
        },
        _ => return,
    };
    context.add_error(kind, line);
}

fn check_int(
    name: &str,
    literal: &str,
    rule: &IntRule,
    line: Option<usize>,
    context: &mut ValidationContext,
) {
    let IntRule::Range { min, max } = rule else {
        return;
    };
    // Literals that do not fit an i64 are out of any range.
    let in_range = parse_int_literal(literal).is_some_and(|n| (*min..=*max).contains(&n));
    if !in_range {
        context.add_error(
            ValidationErrorKind::ValueOutOfRange {
                field: name.to_string(),
            },
            line,
        );
    }
}

// Pod manifest validation
//
// The schema is fixed in code as a table of `ObjectSchema` statics
// (`pod`), walked by one generic validator (`validator`).

pub mod error;
pub mod pod;
pub mod schema;
pub mod validator;

pub use error::{ExpectedKind, InstancePath, PathSegment, ValidationError, ValidationErrorKind};
pub use schema::{FieldKind, FieldSchema, IntRule, ObjectSchema, StringRule};
pub use validator::{get_field, is_int, is_string, validate_document, validate_pod, ValidationContext};

/// Parse `content` and validate it against the Pod schema.
///
/// `filename` is recorded in node locations only; diagnostics carry lines.
///
/// # Errors
///
/// Returns the parse error if `content` is not well-formed YAML.
pub fn lint_str(content: &str, filename: &str) -> podlint_yaml::Result<Vec<ValidationError>> {
    let document = podlint_yaml::parse_file(content, filename)?;
    Ok(validate_pod(&document))
}

//! Rendering of validation errors.

use podlint_validation::ValidationError;
use serde::Serialize;
use std::io::{self, Write};

/// Machine-readable form of one diagnostic.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic<'a> {
    pub file: &'a str,
    pub line: Option<usize>,
    pub code: &'static str,
    pub message: String,
    pub path: String,
}

/// Format one diagnostic as `<file>:<line> <message>`, or just the message
/// when it has no line.
pub fn format_text(error: &ValidationError, file: &str) -> String {
    match error.line {
        Some(line) => format!("{}:{} {}", file, line, error.message()),
        None => error.message(),
    }
}

/// Write one line per diagnostic, in validation order.
pub fn write_text<W: Write>(out: &mut W, errors: &[ValidationError], file: &str) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{}", format_text(error, file))?;
    }
    Ok(())
}

/// Write all diagnostics as a single JSON array.
pub fn write_json<W: Write>(out: &mut W, errors: &[ValidationError], file: &str) -> io::Result<()> {
    let records: Vec<JsonDiagnostic> = errors
        .iter()
        .map(|error| JsonDiagnostic {
            file,
            line: error.line,
            code: error.error_code(),
            message: error.message(),
            path: error.instance_path.to_string(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

//! podlint - lint a Pod manifest against the fixed schema.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use podlint_validation::{validate_pod, ValidationError};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Validate a Pod manifest
#[derive(Parser, Debug)]
#[command(name = "podlint")]
#[command(version, about = "Validate a Pod manifest against the podlint schema", long_about = None)]
struct Args {
    /// Path to the manifest to validate
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    extra: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `<file>:<line> <message>`, one per line
    Text,
    /// A JSON array of diagnostic records
    Json,
}

fn main() {
    // Diagnostics own stdout; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podlint=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            if let Err(print_err) = err.print() {
                tracing::error!(error = %print_err, "failed to print usage");
            }
            process::exit(code);
        }
    };

    match run(&args) {
        Ok(errors) if errors.is_empty() => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Read, parse, validate and report. Returns the diagnostics that were
/// printed.
fn run(args: &Args) -> Result<Vec<ValidationError>> {
    if !args.extra.is_empty() {
        tracing::warn!(count = args.extra.len(), "ignoring extra arguments");
    }

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let filename = args
        .input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("input.yaml");

    let document = podlint_yaml::parse_file(&content, filename)
        .with_context(|| format!("Failed to parse input file {}", args.input.display()))?;

    let errors = validate_pod(&document);
    tracing::debug!(file = filename, errors = errors.len(), "validated manifest");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => output::write_text(&mut out, &errors, filename)?,
        Format::Json => output::write_json(&mut out, &errors, filename)?,
    }
    out.flush()?;

    Ok(errors)
}

//! # podlint-yaml
//!
//! YAML parsing with source location tracking.
//!
//! This crate turns YAML text into a [`YamlDocument`] whose nodes are
//! [`YamlNode`]s: mappings, sequences and scalars, each carrying the
//! [`SourceInfo`] of where it begins. Scalars are classified into a
//! [`ScalarType`] from their tag, quoting style and text, so a quoted
//! `"8080"` stays a string while a plain `8080` (or `8_080`) is an integer.
//!
//! Only the first document of a stream is read.
//!
//! ## Example
//!
//! ```rust
//! use podlint_yaml::parse;
//!
//! let doc = parse("kind: Pod\nspec:\n  os: linux\n").unwrap();
//! let root = doc.root.unwrap();
//! let entry = root.get_entry("spec").unwrap();
//! assert_eq!(entry.key.source_info.line, 2);
//! ```

mod error;
mod parser;
mod scalar;
mod source_info;
mod yaml_node;

pub use error::{Error, Result};
pub use parser::{parse, parse_file};
pub use scalar::{parse_int_literal, resolve_plain_scalar};
pub use source_info::SourceInfo;
pub use yaml_node::{NodeKind, Scalar, ScalarType, YamlDocument, YamlHashEntry, YamlNode};

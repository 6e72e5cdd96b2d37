//! # nini
//!
//! A line-oriented, sectioned key-value configuration format ("NINI") with a
//! round-tripping parser and writer.
//!
//! ## What is NINI?
//!
//! NINI is a simplified INI dialect: comment lines, blank-line-separated
//! paragraphs, optional `[Section]` or `@Section` markers, and
//! `key: value` pairs whose values can carry escaped line breaks and tabs.
//! Documents round-trip through an in-memory [`Section`] model under
//! configurable formatting rules — separator, marker style, comparers,
//! newline, sorting, encoding — bundled in [`NiniOptions`].
//!
//! ## Key Features
//!
//! - **Round-trip fidelity**: parse-then-write preserves sections and
//!   key-values, including empty named sections
//! - **Three line-ending conventions**: `\r\n`, `\n`, and `\r`, mixed freely
//!   within one input
//! - **Precise errors**: every parse failure carries its 1-based line number
//! - **Pooled buffers**: per-operation character buffers leased from a
//!   thread-local pool, released on every exit path
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use nini::{parse_str, to_string, NiniOptions};
//!
//! let text = "# application config\nname: demo\n\n@Server\nhost: localhost\nport: 8080";
//!
//! let sections = parse_str(text).unwrap();
//! assert!(sections[0].is_preamble());
//! assert_eq!(sections[1].name(), "Server");
//! assert_eq!(sections[1].key_values().get("port"), Some("8080"));
//!
//! let written = to_string(&sections).unwrap();
//! let back = parse_str(&written).unwrap();
//! assert_eq!(sections, back);
//! ```
//!
//! ## Presets
//!
//! Three [`NiniOptions`] presets cover the common configurations: the
//! default (`:` separator, `@Name` markers, case-insensitive), a legacy flat
//! preset (case-sensitive, no sections, CRLF, UTF-8 with BOM), and a
//! traditional-INI preset (`=` separator, `[Name]` markers, CRLF).
//!
//! ```rust
//! use nini::{parse_str_with_options, NiniOptions};
//!
//! let sections = parse_str_with_options("[db]\nurl=postgres://x", &NiniOptions::ini()).unwrap();
//! assert_eq!(sections[0].name(), "db");
//! ```
//!
//! ## Format Specification
//!
//! See the [`format`] module for the complete text-format rules.

pub mod buffer;
pub mod error;
pub mod escape;
pub mod format;
pub mod io;
pub mod keyvalues;
pub mod lines;
pub mod macros;
pub mod options;
pub mod paragraphs;
pub mod processing;
pub mod sections;

pub use buffer::CharBuffer;
pub use error::{Error, Result};
pub use escape::EscapeMode;
pub use io::{read_from_path, write_to_path};
pub use keyvalues::KeyValueMap;
pub use options::{Comparison, Encoding, MarkerStyle, Newline, NiniOptions};
pub use sections::Section;

use std::io::{Read, Write};

/// Parses NINI text into sections using the default options.
///
/// # Examples
///
/// ```rust
/// use nini::parse_str;
///
/// let sections = parse_str("key: value").unwrap();
/// assert_eq!(sections[0].key_values().get("key"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed NINI text; parse errors
/// carry the 1-based line number.
pub fn parse_str(text: &str) -> Result<Vec<Section>> {
    parse_str_with_options(text, &NiniOptions::default())
}

/// Parses NINI text into sections with custom options.
///
/// # Errors
///
/// Returns an error for an invalid option bundle or malformed input.
pub fn parse_str_with_options(text: &str, options: &NiniOptions) -> Result<Vec<Section>> {
    sections::parse_sections(text, options)
}

/// Writes sections as NINI text using the default options.
///
/// # Examples
///
/// ```rust
/// use nini::{key_values, to_string, MarkerStyle, Section};
///
/// let section = Section::named(MarkerStyle::AtSign, "S", key_values! { "k" => "v" }).unwrap();
/// let text = to_string(&[section]).unwrap();
/// assert!(text.starts_with("@S"));
/// ```
///
/// # Errors
///
/// Returns an error for illegal keys or section names; validation runs
/// before any output is produced.
pub fn to_string(sections: &[Section]) -> Result<String> {
    to_string_with_options(sections, &NiniOptions::default())
}

/// Writes sections as NINI text with custom options.
///
/// # Errors
///
/// Returns an error for an invalid option bundle, illegal keys or section
/// names, or a named section when the marker style is
/// [`MarkerStyle::None`].
pub fn to_string_with_options(sections: &[Section], options: &NiniOptions) -> Result<String> {
    sections::write_sections(sections, options)
}

/// Parses sections from an I/O stream using the default options.
///
/// # Errors
///
/// Returns an error if reading fails or the input is malformed.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<Section>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(e.to_string()))?;
    parse_str(&text)
}

/// Writes sections to a writer using the default options.
///
/// # Errors
///
/// Returns an error if validation or writing fails.
pub fn to_writer<W: Write>(writer: W, sections: &[Section]) -> Result<()> {
    to_writer_with_options(writer, sections, &NiniOptions::default())
}

/// Writes sections to a writer with custom options.
///
/// # Errors
///
/// Returns an error if validation or writing fails.
pub fn to_writer_with_options<W: Write>(
    mut writer: W,
    sections: &[Section],
    options: &NiniOptions,
) -> Result<()> {
    let text = to_string_with_options(sections, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(e.to_string()))?;
    Ok(())
}

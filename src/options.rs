//! Configuration options for NINI parsing and writing.
//!
//! This module provides the immutable [`NiniOptions`] bundle threaded through
//! every layer of the pipeline, plus the small closed enums it is built from:
//!
//! - [`Comparison`]: case-sensitive or case-insensitive string comparison
//! - [`MarkerStyle`]: section header convention (none, `[Name]`, `@Name`)
//! - [`Newline`]: output line terminator
//! - [`Encoding`]: file encoding for the I/O layer
//!
//! ## Presets
//!
//! Three named presets cover the common configurations:
//!
//! ```rust
//! use nini::{NiniOptions, MarkerStyle};
//!
//! // `:` / `": "`, case-insensitive, `@Name` markers, platform newline
//! let default = NiniOptions::default();
//! assert_eq!(default.marker_style, MarkerStyle::AtSign);
//!
//! // Legacy flat files: case-sensitive, no sections, CRLF, UTF-8 with BOM
//! let flat = NiniOptions::flat();
//! assert_eq!(flat.marker_style, MarkerStyle::None);
//!
//! // Traditional INI: `=` separator, `[Name]` markers, CRLF
//! let ini = NiniOptions::ini();
//! assert_eq!(ini.separator, '=');
//! ```
//!
//! Custom configurations start from a preset and override fields:
//!
//! ```rust
//! use nini::{NiniOptions, MarkerStyle, Newline};
//!
//! let options = NiniOptions::default()
//!     .with_marker_style(MarkerStyle::IniBrackets)
//!     .with_newline(Newline::Lf)
//!     .with_sort_keys(true);
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// String comparison used for key and section-name equality and ordering.
///
/// A closed enum rather than a trait object: the format only ever needs these
/// two comparers, and value semantics keep [`NiniOptions`] freely cloneable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact codepoint comparison.
    CaseSensitive,
    /// Unicode simple lowercase-fold comparison.
    #[default]
    CaseInsensitive,
}

impl Comparison {
    /// Tests two strings for equality under this comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nini::Comparison;
    ///
    /// assert!(Comparison::CaseInsensitive.eq("Key", "KEY"));
    /// assert!(!Comparison::CaseSensitive.eq("Key", "KEY"));
    /// ```
    #[must_use]
    pub fn eq(self, a: &str, b: &str) -> bool {
        match self {
            Comparison::CaseSensitive => a == b,
            Comparison::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }

    /// Orders two strings under this comparison.
    #[must_use]
    pub fn cmp(self, a: &str, b: &str) -> Ordering {
        match self {
            Comparison::CaseSensitive => a.cmp(b),
            Comparison::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// The visual convention for section headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// No section markers; the whole document is one flat key-value block.
    None,
    /// `@Name` headers.
    #[default]
    AtSign,
    /// `[Name]` headers.
    IniBrackets,
}

/// Output line terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Newline {
    Lf,
    CrLf,
}

impl Newline {
    /// The platform-native newline: CRLF on Windows, LF elsewhere.
    #[must_use]
    pub fn platform() -> Self {
        if cfg!(windows) {
            Newline::CrLf
        } else {
            Newline::Lf
        }
    }

    /// Returns the string representation of this newline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nini::Newline;
    ///
    /// assert_eq!(Newline::Lf.as_str(), "\n");
    /// assert_eq!(Newline::CrLf.as_str(), "\r\n");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// File encoding used by the I/O layer.
///
/// Both variants are UTF-8 on the wire; they differ only in whether a byte
/// order mark is written (and stripped on read).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf8WithBom,
}

/// Immutable configuration bundle for NINI parsing and writing.
///
/// All fields are explicit in every preset — no implicit defaults escape
/// [`NiniOptions::validate`]. Construct via a preset, customize with the
/// `with_*` builders, and pass by reference through every parse/write call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NiniOptions {
    /// Character that splits a key from its value when parsing.
    pub separator: char,
    /// String emitted between key and value when writing; must begin with
    /// [`separator`](Self::separator).
    pub output_separator: String,
    /// Comparer for section names (duplicate detection, lookup, sorting).
    pub section_comparison: Comparison,
    /// Comparer for keys (duplicate detection, lookup, sorting).
    pub key_comparison: Comparison,
    /// Section header convention.
    pub marker_style: MarkerStyle,
    /// Output line terminator.
    pub newline: Newline,
    /// Sort keys within each section when writing.
    pub sort_keys: bool,
    /// Sort named sections by name when writing (the preamble always stays
    /// first).
    pub sort_sections: bool,
    /// File encoding for the I/O layer.
    pub encoding: Encoding,
}

impl Default for NiniOptions {
    fn default() -> Self {
        NiniOptions {
            separator: ':',
            output_separator: ": ".to_string(),
            section_comparison: Comparison::CaseInsensitive,
            key_comparison: Comparison::CaseInsensitive,
            marker_style: MarkerStyle::AtSign,
            newline: Newline::platform(),
            sort_keys: false,
            sort_sections: false,
            encoding: Encoding::Utf8,
        }
    }
}

impl NiniOptions {
    /// Creates the default preset: `:` separator, `": "` output separator,
    /// case-insensitive comparers, `@Name` markers, platform newline, UTF-8.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the legacy flat preset: `:` separator, `":"` output separator,
    /// case-sensitive comparers, no sections, CRLF, UTF-8 with BOM.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nini::{NiniOptions, Comparison};
    ///
    /// let flat = NiniOptions::flat();
    /// assert_eq!(flat.output_separator, ":");
    /// assert_eq!(flat.key_comparison, Comparison::CaseSensitive);
    /// ```
    #[must_use]
    pub fn flat() -> Self {
        NiniOptions {
            separator: ':',
            output_separator: ":".to_string(),
            section_comparison: Comparison::CaseSensitive,
            key_comparison: Comparison::CaseSensitive,
            marker_style: MarkerStyle::None,
            newline: Newline::CrLf,
            sort_keys: false,
            sort_sections: false,
            encoding: Encoding::Utf8WithBom,
        }
    }

    /// Creates the traditional-INI preset: `=` separator, `"="` output
    /// separator, case-insensitive comparers, `[Name]` markers, CRLF, UTF-8
    /// without BOM.
    #[must_use]
    pub fn ini() -> Self {
        NiniOptions {
            separator: '=',
            output_separator: "=".to_string(),
            section_comparison: Comparison::CaseInsensitive,
            key_comparison: Comparison::CaseInsensitive,
            marker_style: MarkerStyle::IniBrackets,
            newline: Newline::CrLf,
            sort_keys: false,
            sort_sections: false,
            encoding: Encoding::Utf8,
        }
    }

    /// Sets the separator character used when parsing.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the separator string emitted when writing.
    #[must_use]
    pub fn with_output_separator(mut self, output_separator: impl Into<String>) -> Self {
        self.output_separator = output_separator.into();
        self
    }

    /// Sets the comparer for section names.
    #[must_use]
    pub fn with_section_comparison(mut self, comparison: Comparison) -> Self {
        self.section_comparison = comparison;
        self
    }

    /// Sets the comparer for keys.
    #[must_use]
    pub fn with_key_comparison(mut self, comparison: Comparison) -> Self {
        self.key_comparison = comparison;
        self
    }

    /// Sets the section header convention.
    #[must_use]
    pub fn with_marker_style(mut self, marker_style: MarkerStyle) -> Self {
        self.marker_style = marker_style;
        self
    }

    /// Sets the output line terminator.
    #[must_use]
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    /// Sorts keys within each section when writing.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Sorts named sections by name when writing.
    #[must_use]
    pub fn with_sort_sections(mut self, sort_sections: bool) -> Self {
        self.sort_sections = sort_sections;
        self
    }

    /// Sets the file encoding for the I/O layer.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Validates this option bundle.
    ///
    /// Runs at every parse/write entry point, so an invalid combination never
    /// reaches the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the separator is whitespace, a line
    /// terminator, or the escape character, or when the output separator is
    /// empty, does not begin with the separator, or contains a line
    /// terminator.
    pub fn validate(&self) -> Result<()> {
        if self.separator == '\n' || self.separator == '\r' {
            return Err(Error::validation("separator must not be a line terminator"));
        }
        if self.separator.is_whitespace() {
            return Err(Error::validation("separator must not be whitespace"));
        }
        if self.separator == '\\' {
            return Err(Error::validation(
                "separator must not be the escape character '\\'",
            ));
        }
        if !self.output_separator.starts_with(self.separator) {
            return Err(Error::validation(format!(
                "output separator {:?} must begin with the separator {:?}",
                self.output_separator, self.separator
            )));
        }
        if self.output_separator.contains(['\n', '\r']) {
            return Err(Error::validation(
                "output separator must not contain a line terminator",
            ));
        }
        Ok(())
    }
}

//! NINI Format Specification
//!
//! This module documents the NINI text format as implemented by this
//! library.
//!
//! # Overview
//!
//! NINI is a simplified INI dialect: a line-oriented, sectioned key-value
//! format built from paragraphs. It is designed to round-trip — parse then
//! write reproduces the same sections and key-values — while tolerating
//! hand-edited files.
//!
//! # Lines
//!
//! All three line-ending conventions are recognized, even mixed within one
//! input: `\r\n`, bare `\n`, and bare `\r`. Line endings are terminators,
//! not separators:
//!
//! - a trailing terminator produces no extra empty line,
//! - empty input has zero lines,
//! - two consecutive terminators enclose exactly one empty line.
//!
//! # Line kinds
//!
//! | Kind | Rule |
//! |------|------|
//! | Comment | first character (column 0, no leading whitespace) starts `#`, `//`, or `;`; the whole line is ignored |
//! | Blank | empty or entirely whitespace; separates paragraphs |
//! | Section marker | first line of a paragraph, column 0: `[Name]` or `@Name` depending on the configured style |
//! | Key-value | `key<separator>value` |
//!
//! # Paragraphs and sections
//!
//! A paragraph is a maximal run of non-blank lines; one or more blank lines
//! separate paragraphs. If a paragraph's first line carries a marker, the
//! remaining lines are that named section's key-values. Unmarked paragraphs
//! belong to the *preamble*, the implicit unnamed leading section.
//!
//! Section names must be non-empty with no leading or trailing whitespace.
//! A marker line violating this is a hard parse error — it is an explicit,
//! malformed marker, not the absence of one. Duplicate section names within
//! one document are an error.
//!
//! A named section with no keys is written as its marker line followed by
//! the comment `# empty`, so the section survives a round trip.
//!
//! # Key-value lines
//!
//! The first occurrence of the separator character splits key from value:
//!
//! ```text
//! host: localhost
//! greeting: line one\nline two
//! ```
//!
//! **Rules**:
//! - A line with no separator, or with the separator at column 0 (empty
//!   key), is a format error carrying the line number.
//! - The raw key must have no leading or trailing whitespace; offending keys
//!   are rejected, never auto-trimmed.
//! - The value is trimmed, then unescaped.
//! - A key appearing twice within one section is a duplicate-key error.
//! - On output, lines are `key<output_separator>escapedValue`; the default
//!   output separator is `": "`.
//!
//! # Value escaping
//!
//! | Character | Escape |
//! |-----------|--------|
//! | `\` | `\\` |
//! | line feed | `\n` |
//! | carriage return | `\r` |
//! | tab | `\t` |
//!
//! All other characters pass through unchanged. Decoding is lenient: a
//! backslash followed by an unmapped character is emitted literally, so
//! hand-edited files containing stray backslashes still round-trip.
//!
//! # Presets
//!
//! | Preset | Separator | Output | Comparers | Markers | Newline | Encoding |
//! |--------|-----------|--------|-----------|---------|---------|----------|
//! | Default | `:` | `": "` | case-insensitive | `@Name` | platform | UTF-8 |
//! | Flat | `:` | `":"` | case-sensitive | none | CRLF | UTF-8 + BOM |
//! | Ini | `=` | `"="` | case-insensitive | `[Name]` | CRLF | UTF-8 |
//!
//! # Limitations
//!
//! - No multi-line bracket values, interpolation, or includes.
//! - No schema validation beyond syntactic key/section legality.
//! - The format cannot represent a null value; values are always strings,
//!   possibly empty.

// This module contains only documentation; no implementation code

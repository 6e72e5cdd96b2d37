//! Ordered key-value storage and the single-paragraph `key: value` codec.
//!
//! [`KeyValueMap`] wraps [`IndexMap`] so insertion order is preserved while
//! lookups, duplicate detection, and sorting honor the configured
//! [`Comparison`]. Key-value *content* equality is order-irrelevant, which is
//! exactly `IndexMap`'s equality.
//!
//! The codec half parses and writes the body of one paragraph:
//!
//! - **Parse** ([`parse_key_values`]): per non-blank, non-comment line, split
//!   at the first separator, validate the raw key, trim and unescape the
//!   value. Failures carry the 1-based document line number.
//! - **Write** ([`write_key_values`]): validate every key up front (writes
//!   are atomic with respect to validation), escape values, join
//!   `key + output_separator + escaped` per line.
//!
//! ## Examples
//!
//! ```rust
//! use nini::{Comparison, KeyValueMap};
//!
//! let mut map = KeyValueMap::new(Comparison::CaseInsensitive);
//! map.insert("Timeout", "30");
//! assert_eq!(map.get("TIMEOUT"), Some("30"));
//! assert_eq!(map.get_i64("timeout"), Some(30));
//! ```

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::escape::{escape, unescape, EscapeMode};
use crate::lines::is_blank;
use crate::options::{Comparison, NiniOptions};

/// Line prefixes that mark a whole line as a comment, at column 0 only.
pub const COMMENT_PREFIXES: [&str; 3] = ["#", "//", ";"];

/// Whether `line` is a comment: one of the comment prefixes at column 0,
/// with no leading whitespace.
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// An insertion-ordered map of string keys to string values with
/// comparer-aware lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValueMap {
    entries: IndexMap<String, String>,
    comparison: Comparison,
}

impl KeyValueMap {
    /// Creates an empty map using the given key comparer.
    #[must_use]
    pub fn new(comparison: Comparison) -> Self {
        KeyValueMap {
            entries: IndexMap::new(),
            comparison,
        }
    }

    /// Creates a map from `(key, value)` pairs. Later pairs overwrite
    /// earlier ones that compare equal.
    pub fn from_pairs<K, V>(comparison: Comparison, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new(comparison);
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }

    /// The comparer this map was built with.
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Inserts a pair, replacing any entry whose key compares equal.
    ///
    /// The original key spelling is kept on replacement; the old value is
    /// returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.existing_key(&key) {
            Some(existing) => self.entries.insert(existing, value),
            None => self.entries.insert(key, value),
        }
    }

    /// The value for `key` under the map's comparer.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.entries.get(key) {
            return Some(value);
        }
        if self.comparison == Comparison::CaseSensitive {
            return None;
        }
        self.entries
            .iter()
            .find(|(k, _)| self.comparison.eq(k, key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the map holds a key comparing equal to `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry whose key compares equal to `key`, preserving the
    /// order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let existing = self.existing_key(key)?;
        self.entries.shift_remove(&existing)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// The value for `key` parsed as a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.parse().ok()
    }

    /// The value for `key` parsed as a signed integer.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.parse().ok()
    }

    /// The value for `key` parsed as a float.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.parse().ok()
    }

    fn existing_key(&self, key: &str) -> Option<String> {
        if self.entries.contains_key(key) {
            return Some(key.to_string());
        }
        if self.comparison == Comparison::CaseSensitive {
            return None;
        }
        self.entries
            .keys()
            .find(|k| self.comparison.eq(k, key))
            .cloned()
    }
}

impl<'a> IntoIterator for &'a KeyValueMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for KeyValueMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parses key-value content lines into a map.
///
/// `lines` pairs each content line with its 1-based document line number.
/// Blank and comment lines are skipped; every other line must be
/// `key<separator>value` with a clean key.
///
/// # Errors
///
/// - [`Error::Format`] when the separator is missing, the key is empty, or
///   the raw key carries boundary whitespace (keys are rejected, never
///   auto-trimmed)
/// - [`Error::DuplicateKey`] when a key compares equal to one already parsed
pub fn parse_key_values<'a>(
    lines: impl IntoIterator<Item = (usize, &'a str)>,
    options: &NiniOptions,
) -> Result<KeyValueMap> {
    let mut map = KeyValueMap::new(options.key_comparison);
    parse_key_values_into(&mut map, lines, options)?;
    Ok(map)
}

/// Parses key-value content lines into an existing map.
///
/// Duplicate detection spans the map's prior content, so several paragraphs
/// can accumulate into one section (the preamble) under one duplicate rule.
///
/// # Errors
///
/// Same as [`parse_key_values`].
pub fn parse_key_values_into<'a>(
    map: &mut KeyValueMap,
    lines: impl IntoIterator<Item = (usize, &'a str)>,
    options: &NiniOptions,
) -> Result<()> {
    for (line_number, line) in lines {
        if is_blank(line) || is_comment_line(line) {
            continue;
        }
        let Some(at) = line.find(options.separator) else {
            return Err(Error::format(
                line_number,
                format!("missing separator {:?}", options.separator),
            ));
        };
        if at == 0 {
            return Err(Error::format(line_number, "empty key"));
        }
        let raw_key = &line[..at];
        if raw_key.trim() != raw_key {
            return Err(Error::format(
                line_number,
                format!("key {raw_key:?} has leading or trailing whitespace"),
            ));
        }
        if map.contains_key(raw_key) {
            return Err(Error::duplicate_key(line_number, raw_key));
        }
        let raw_value = &line[at + options.separator.len_utf8()..];
        let value = unescape(raw_value.trim(), EscapeMode::NiniValue);
        map.insert(raw_key, value);
    }
    Ok(())
}

/// Validates a key for writing.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the key is empty, carries boundary
/// whitespace, contains the separator or a line terminator, or starts with a
/// comment prefix or section-marker character.
pub fn validate_key(key: &str, options: &NiniOptions) -> Result<()> {
    if key.is_empty() {
        return Err(Error::validation("key must not be empty"));
    }
    if key.trim() != key {
        return Err(Error::validation(format!(
            "key {key:?} must not have leading or trailing whitespace"
        )));
    }
    if key.contains(options.separator) {
        return Err(Error::validation(format!(
            "key {key:?} must not contain the separator {:?}",
            options.separator
        )));
    }
    if key.contains(['\n', '\r']) {
        return Err(Error::validation(format!(
            "key {key:?} must not contain a line terminator"
        )));
    }
    if is_comment_line(key) {
        return Err(Error::validation(format!(
            "key {key:?} must not start with a comment prefix"
        )));
    }
    if key.starts_with(['[', '@']) {
        return Err(Error::validation(format!(
            "key {key:?} must not start with a section-marker character"
        )));
    }
    Ok(())
}

/// Writes the map as `key<output_separator>escapedValue` lines into `out`,
/// joined (not terminated) by the configured newline.
///
/// Every key is validated before anything is written.
///
/// # Errors
///
/// Returns [`Error::Validation`] for any illegal key.
pub fn write_key_values(map: &KeyValueMap, options: &NiniOptions, out: &mut String) -> Result<()> {
    for key in map.keys() {
        validate_key(key, options)?;
    }
    let mut keys: Vec<&str> = map.keys().collect();
    if options.sort_keys {
        keys.sort_by(|a, b| options.key_comparison.cmp(a, b));
    }
    for (index, key) in keys.into_iter().enumerate() {
        if index > 0 {
            out.push_str(options.newline.as_str());
        }
        let value = map.get(key).unwrap_or_default();
        out.push_str(key);
        out.push_str(&options.output_separator);
        out.push_str(&escape(value, EscapeMode::NiniValue));
    }
    Ok(())
}

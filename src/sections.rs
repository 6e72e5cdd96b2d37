//! Section parsing and writing.
//!
//! A NINI document is a sequence of paragraphs. The first line of each
//! paragraph — and only the first line, at column 0 — is inspected as a
//! candidate section marker under the configured [`MarkerStyle`]. A marked
//! paragraph's remaining lines form that section's key-value body; unmarked
//! paragraphs accumulate into the single unmarked *preamble*.
//!
//! An explicit malformed marker (empty or whitespace-bounded name, missing
//! `]`) is a hard parse error — it is a broken marker, not the absence of
//! one. Duplicate section names within one parse are an error, matching the
//! duplicate-key rule.
//!
//! Writing mirrors parsing: the preamble first, then named sections
//! (optionally name-sorted), each as a marker line plus a key-value block,
//! with one blank line between paragraphs. A named section with no keys gets
//! the [`EMPTY_SECTION_COMMENT`] line after its marker so a round trip
//! preserves it.
//!
//! ## Examples
//!
//! ```rust
//! use nini::{parse_str_with_options, MarkerStyle, NiniOptions};
//!
//! let options = NiniOptions::default().with_marker_style(MarkerStyle::IniBrackets);
//! let sections = parse_str_with_options("Name: value\n\n[Section]\nKey: a\\nb", &options).unwrap();
//!
//! assert!(sections[0].is_preamble());
//! assert_eq!(sections[0].key_values().get("Name"), Some("value"));
//! assert_eq!(sections[1].name(), "Section");
//! assert_eq!(sections[1].key_values().get("Key"), Some("a\nb"));
//! ```

use crate::error::{Error, Result};
use crate::keyvalues::{
    parse_key_values, parse_key_values_into, validate_key, write_key_values, KeyValueMap,
};
use crate::options::{MarkerStyle, NiniOptions};
use crate::paragraphs::split_paragraphs;

/// Comment emitted under the marker of a named section with no keys, so the
/// section survives a round trip as a visible paragraph.
pub const EMPTY_SECTION_COMMENT: &str = "# empty";

/// One section of a document: a marker style, a name, and its key-values.
///
/// The unmarked preamble is represented as `marker = MarkerStyle::None` with
/// an empty name. Sections are immutable once constructed; use the `with_*`
/// copies for edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    marker: MarkerStyle,
    name: String,
    key_values: KeyValueMap,
}

impl Section {
    /// Creates the unmarked preamble section.
    #[must_use]
    pub fn preamble(key_values: KeyValueMap) -> Self {
        Section {
            marker: MarkerStyle::None,
            name: String::new(),
            key_values,
        }
    }

    /// Creates a named section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `marker` is [`MarkerStyle::None`]
    /// or the name is empty, whitespace-bounded, or contains a character the
    /// marker syntax cannot carry (`]`, line terminators).
    pub fn named(
        marker: MarkerStyle,
        name: impl Into<String>,
        key_values: KeyValueMap,
    ) -> Result<Self> {
        let name = name.into();
        if marker == MarkerStyle::None {
            return Err(Error::validation(
                "a named section requires a marker style other than None",
            ));
        }
        validate_section_name(&name)?;
        Ok(Section {
            marker,
            name,
            key_values,
        })
    }

    /// The marker style this section was constructed with.
    #[must_use]
    pub fn marker(&self) -> MarkerStyle {
        self.marker
    }

    /// The section name; empty for the preamble.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section's key-values.
    #[must_use]
    pub fn key_values(&self) -> &KeyValueMap {
        &self.key_values
    }

    /// Whether this is the unmarked preamble.
    #[must_use]
    pub fn is_preamble(&self) -> bool {
        self.marker == MarkerStyle::None && self.name.is_empty()
    }

    /// A copy of this section with different key-values.
    #[must_use]
    pub fn with_key_values(&self, key_values: KeyValueMap) -> Self {
        Section {
            marker: self.marker,
            name: self.name.clone(),
            key_values,
        }
    }

    /// A copy of this section with a different name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an illegal name, or when renaming
    /// the preamble.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Self> {
        if self.is_preamble() {
            return Err(Error::validation("the preamble cannot be renamed"));
        }
        let name = name.into();
        validate_section_name(&name)?;
        Ok(Section {
            marker: self.marker,
            name,
            key_values: self.key_values.clone(),
        })
    }
}

fn validate_section_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("section name must not be empty"));
    }
    if name.trim() != name {
        return Err(Error::validation(format!(
            "section name {name:?} must not have leading or trailing whitespace"
        )));
    }
    if name.contains([']', '\n', '\r']) {
        return Err(Error::validation(format!(
            "section name {name:?} contains a character the marker syntax cannot carry"
        )));
    }
    Ok(())
}

/// The name of the marker on `first_line`, if the line carries one.
///
/// Only the configured style is recognized; an explicit malformed marker is
/// a format error, not absence of a marker.
fn detect_marker(first_line: &str, options: &NiniOptions, line_number: usize) -> Result<Option<String>> {
    let name = match options.marker_style {
        MarkerStyle::None => return Ok(None),
        MarkerStyle::AtSign => match first_line.strip_prefix('@') {
            Some(rest) => rest,
            None => return Ok(None),
        },
        MarkerStyle::IniBrackets => match first_line.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').ok_or_else(|| {
                Error::format(line_number, format!("unterminated section marker {first_line:?}"))
            })?,
            None => return Ok(None),
        },
    };
    if name.trim().is_empty() {
        return Err(Error::format(line_number, "empty section name"));
    }
    if name.trim() != name {
        return Err(Error::format(
            line_number,
            format!("section name {name:?} has leading or trailing whitespace"),
        ));
    }
    Ok(Some(name.to_string()))
}

/// Parses NINI text into its sections.
///
/// The preamble, when it has any keys, comes first; named sections follow in
/// document order. An unmarked paragraph anywhere in the document
/// contributes to the one preamble. A paragraph with zero key-values is kept
/// only when it carried an explicit marker.
///
/// # Errors
///
/// [`Error::Format`], [`Error::DuplicateKey`], or
/// [`Error::DuplicateSection`], each carrying the 1-based line number, plus
/// [`Error::Validation`] for an invalid option bundle.
pub fn parse_sections(text: &str, options: &NiniOptions) -> Result<Vec<Section>> {
    options.validate()?;
    let mut preamble = KeyValueMap::new(options.key_comparison);
    let mut named: Vec<Section> = Vec::new();

    for paragraph in split_paragraphs(text) {
        let first = paragraph.lines[0];
        match detect_marker(first, options, paragraph.start_line)? {
            Some(name) => {
                if named
                    .iter()
                    .any(|s| options.section_comparison.eq(s.name(), &name))
                {
                    return Err(Error::duplicate_section(paragraph.start_line, name));
                }
                let body = paragraph
                    .lines
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(i, line)| (paragraph.line_number(i), *line));
                let key_values = parse_key_values(body, options)?;
                named.push(Section {
                    marker: options.marker_style,
                    name,
                    key_values,
                });
            }
            None => {
                let body = paragraph
                    .lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| (paragraph.line_number(i), *line));
                parse_key_values_into(&mut preamble, body, options)?;
            }
        }
    }

    let mut sections = Vec::with_capacity(named.len() + 1);
    if !preamble.is_empty() {
        sections.push(Section::preamble(preamble));
    }
    sections.extend(named);
    Ok(sections)
}

/// Writes sections as NINI text.
///
/// All validation runs before any output is assembled, so a failed write
/// produces nothing. The preamble is emitted first regardless of its
/// position in `sections`; named sections follow in input order, or sorted
/// by the section comparer when `sort_sections` is set. No trailing newline
/// is emitted.
///
/// # Errors
///
/// Returns [`Error::Validation`] for an invalid option bundle, more than one
/// preamble, a named section under [`MarkerStyle::None`], a duplicate
/// section name, or an illegal key or section name.
pub fn write_sections(sections: &[Section], options: &NiniOptions) -> Result<String> {
    options.validate()?;

    let preambles: Vec<&Section> = sections.iter().filter(|s| s.is_preamble()).collect();
    if preambles.len() > 1 {
        return Err(Error::validation("at most one preamble section is allowed"));
    }
    let mut named: Vec<&Section> = sections.iter().filter(|s| !s.is_preamble()).collect();
    if !named.is_empty() && options.marker_style == MarkerStyle::None {
        return Err(Error::validation(
            "cannot write named sections when the marker style is None",
        ));
    }
    for (index, section) in named.iter().enumerate() {
        validate_section_name(section.name())?;
        if named[..index]
            .iter()
            .any(|s| options.section_comparison.eq(s.name(), section.name()))
        {
            return Err(Error::validation(format!(
                "duplicate section name {:?}",
                section.name()
            )));
        }
    }
    for section in sections {
        for key in section.key_values().keys() {
            validate_key(key, options)?;
        }
    }
    if options.sort_sections {
        named.sort_by(|a, b| options.section_comparison.cmp(a.name(), b.name()));
    }

    let newline = options.newline.as_str();
    let mut paragraphs: Vec<String> = Vec::with_capacity(named.len() + 1);

    if let Some(preamble) = preambles.first() {
        if !preamble.key_values().is_empty() {
            let mut block = String::new();
            write_key_values(preamble.key_values(), options, &mut block)?;
            paragraphs.push(block);
        }
    }
    for section in named {
        let mut block = match options.marker_style {
            MarkerStyle::AtSign => format!("@{}", section.name()),
            MarkerStyle::IniBrackets => format!("[{}]", section.name()),
            MarkerStyle::None => unreachable!("rejected above"),
        };
        block.push_str(newline);
        if section.key_values().is_empty() {
            block.push_str(EMPTY_SECTION_COMMENT);
        } else {
            write_key_values(section.key_values(), options, &mut block)?;
        }
        paragraphs.push(block);
    }

    let separator = format!("{newline}{newline}");
    Ok(paragraphs.join(&separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Comparison, Newline};

    fn options() -> NiniOptions {
        NiniOptions::default().with_newline(Newline::Lf)
    }

    #[test]
    fn document_with_ini_brackets() {
        let opts = options().with_marker_style(MarkerStyle::IniBrackets);
        let sections = parse_sections("Name: value\n\n[Section]\nKey: a\\nb", &opts).unwrap();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_preamble());
        assert_eq!(sections[0].key_values().get("Name"), Some("value"));
        assert_eq!(sections[1].name(), "Section");
        assert_eq!(sections[1].key_values().get("Key"), Some("a\nb"));
    }

    #[test]
    fn unmarked_paragraphs_merge_into_one_preamble() {
        let sections = parse_sections("a: 1\n\nb: 2", &options()).unwrap();
        assert_eq!(sections.len(), 1);
        assert!(sections[0].is_preamble());
        assert_eq!(sections[0].key_values().len(), 2);
    }

    #[test]
    fn duplicate_key_across_preamble_paragraphs() {
        let err = parse_sections("a: 1\n\na: 2", &options()).unwrap_err();
        assert_eq!(err, Error::duplicate_key(3, "a"));
    }

    #[test]
    fn malformed_marker_is_a_hard_error() {
        let opts = options().with_marker_style(MarkerStyle::IniBrackets);
        assert!(matches!(
            parse_sections("[]", &opts),
            Err(Error::Format { line: 1, .. })
        ));
        assert!(matches!(
            parse_sections("[ name]\nk: v", &opts),
            Err(Error::Format { line: 1, .. })
        ));
        assert!(matches!(
            parse_sections("[open\nk: v", &opts),
            Err(Error::Format { line: 1, .. })
        ));
        assert!(matches!(
            parse_sections("@ \nk: v", &options()),
            Err(Error::Format { line: 1, .. })
        ));
    }

    #[test]
    fn marker_only_recognized_for_configured_style() {
        // Under AtSign, "[x]: v" is an ordinary key-value line.
        let sections = parse_sections("[x]: v", &options()).unwrap();
        assert_eq!(sections[0].key_values().get("[x]"), Some("v"));
    }

    #[test]
    fn duplicate_sections_rejected() {
        let err = parse_sections("@S\na: 1\n\n@s\nb: 2", &options()).unwrap_err();
        assert_eq!(err, Error::duplicate_section(4, "s"));

        let sensitive = options().with_section_comparison(Comparison::CaseSensitive);
        assert_eq!(
            parse_sections("@S\na: 1\n\n@s\nb: 2", &sensitive).unwrap().len(),
            2
        );
    }

    #[test]
    fn comment_only_unmarked_paragraph_dropped() {
        let sections = parse_sections("# banner\n\n@S\nk: v", &options()).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name(), "S");
    }

    #[test]
    fn empty_marked_section_kept() {
        let sections = parse_sections("@Empty\n\n@Full\nk: v", &options()).unwrap();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].key_values().is_empty());
    }

    #[test]
    fn write_basic_document() {
        let opts = options();
        let sections = vec![
            Section::preamble(KeyValueMap::from_pairs(
                opts.key_comparison,
                [("Name", "value")],
            )),
            Section::named(
                MarkerStyle::AtSign,
                "Server",
                KeyValueMap::from_pairs(opts.key_comparison, [("host", "local\nhost")]),
            )
            .unwrap(),
        ];
        let text = write_sections(&sections, &opts).unwrap();
        assert_eq!(text, "Name: value\n\n@Server\nhost: local\\nhost");
    }

    #[test]
    fn empty_section_gets_comment_and_round_trips() {
        let opts = options();
        let empty = Section::named(
            MarkerStyle::AtSign,
            "Empty",
            KeyValueMap::new(opts.key_comparison),
        )
        .unwrap();
        let text = write_sections(&[empty.clone()], &opts).unwrap();
        assert_eq!(text, "@Empty\n# empty");

        let back = parse_sections(&text, &opts).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].name(), "Empty");
        assert!(back[0].key_values().is_empty());
    }

    #[test]
    fn named_section_without_markers_is_a_config_error() {
        let opts = options().with_marker_style(MarkerStyle::None);
        let section = Section::named(
            MarkerStyle::AtSign,
            "S",
            KeyValueMap::new(opts.key_comparison),
        )
        .unwrap();
        assert!(matches!(
            write_sections(&[section], &opts),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn preamble_always_written_first() {
        let opts = options();
        let named = Section::named(
            MarkerStyle::AtSign,
            "S",
            KeyValueMap::from_pairs(opts.key_comparison, [("a", "1")]),
        )
        .unwrap();
        let preamble =
            Section::preamble(KeyValueMap::from_pairs(opts.key_comparison, [("p", "0")]));
        let text = write_sections(&[named, preamble], &opts).unwrap();
        assert!(text.starts_with("p: 0\n\n@S"));
    }

    #[test]
    fn sections_sorted_on_request() {
        let opts = options().with_sort_sections(true);
        let sections = vec![
            Section::named(
                MarkerStyle::AtSign,
                "beta",
                KeyValueMap::from_pairs(opts.key_comparison, [("k", "1")]),
            )
            .unwrap(),
            Section::named(
                MarkerStyle::AtSign,
                "Alpha",
                KeyValueMap::from_pairs(opts.key_comparison, [("k", "2")]),
            )
            .unwrap(),
        ];
        let text = write_sections(&sections, &opts).unwrap();
        assert!(text.starts_with("@Alpha"));
    }

    #[test]
    fn section_constructors_enforce_names() {
        let map = KeyValueMap::new(Comparison::CaseInsensitive);
        assert!(Section::named(MarkerStyle::AtSign, "", map.clone()).is_err());
        assert!(Section::named(MarkerStyle::AtSign, " pad ", map.clone()).is_err());
        assert!(Section::named(MarkerStyle::None, "S", map.clone()).is_err());
        assert!(Section::named(MarkerStyle::IniBrackets, "a]b", map.clone()).is_err());

        let section = Section::named(MarkerStyle::AtSign, "Old", map).unwrap();
        assert_eq!(section.with_name("New").unwrap().name(), "New");
        assert!(section.with_name("").is_err());
    }
}

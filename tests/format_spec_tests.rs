//! Byte-exact conformance tests for the NINI text format, mirroring the
//! rules documented in the `nini::format` module.

use nini::escape::{escape, unescape, EscapeMode};
use nini::processing::{
    process_text, InnerBlanks, LineProcessingOptions, ProcessedLines, TrailingBlanks,
};
use nini::{
    key_values, parse_str, parse_str_with_options, to_string_with_options, Encoding, MarkerStyle,
    Newline, NiniOptions, Section,
};

#[test]
fn default_output_separator_is_colon_space() {
    let options = NiniOptions::default().with_newline(Newline::Lf);
    let sections = vec![Section::preamble(key_values! { "key" => "value" })];
    assert_eq!(
        to_string_with_options(&sections, &options).unwrap(),
        "key: value"
    );
}

#[test]
fn escape_table_is_exact() {
    assert_eq!(escape("\\", EscapeMode::NiniValue), "\\\\");
    assert_eq!(escape("\n", EscapeMode::NiniValue), "\\n");
    assert_eq!(escape("\r", EscapeMode::NiniValue), "\\r");
    assert_eq!(escape("\t", EscapeMode::NiniValue), "\\t");
    // Everything else passes through, including quotes and unicode.
    assert_eq!(escape("\"héllo\"", EscapeMode::NiniValue), "\"héllo\"");
}

#[test]
fn lenient_unescape_preserves_stray_backslashes() {
    assert_eq!(unescape("C:\\Users\\x", EscapeMode::NiniValue), "C:\\Users\\x");
    assert_eq!(unescape("trailing\\", EscapeMode::NiniValue), "trailing\\");
}

#[test]
fn comment_markers_at_column_zero_only() {
    let sections = parse_str("# hash\n// slashes\n; semicolon\nkey: value").unwrap();
    assert_eq!(sections[0].key_values().len(), 1);

    // Indented "comment" is not a comment; it is a malformed key.
    assert!(parse_str("  # not a comment").is_err());
}

#[test]
fn blank_line_runs_classified_by_position() {
    let options = LineProcessingOptions::default()
        .with_inner_blanks(InnerBlanks::Collapse)
        .with_trailing_blanks(TrailingBlanks::Remove);
    let lines: Vec<String> = ProcessedLines::new("A\n\n\nB\n\n", &options).collect();
    assert_eq!(lines, vec!["A", "", "B"]);

    let joined = process_text("A\n\n\nB\n\n", &options.with_newline(Newline::Lf));
    assert_eq!(joined, "A\n\nB");
}

#[test]
fn sectioned_document_parses() {
    let options = NiniOptions::default().with_marker_style(MarkerStyle::IniBrackets);
    let sections =
        parse_str_with_options("Name: value\n\n[Section]\nKey: a\\nb", &options).unwrap();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].is_preamble());
    assert_eq!(sections[0].key_values().get("Name"), Some("value"));
    assert_eq!(sections[1].name(), "Section");
    assert_eq!(sections[1].key_values().get("Key"), Some("a\nb"));
}

#[test]
fn empty_section_written_with_comment_marker() {
    let options = NiniOptions::default().with_newline(Newline::Lf);
    let sections = vec![
        Section::named(MarkerStyle::AtSign, "Empty", key_values! {}).unwrap(),
        Section::named(MarkerStyle::AtSign, "Full", key_values! { "k" => "v" }).unwrap(),
    ];
    let text = to_string_with_options(&sections, &options).unwrap();
    assert_eq!(text, "@Empty\n# empty\n\n@Full\nk: v");

    let back = parse_str_with_options(&text, &options).unwrap();
    assert_eq!(back, sections);
}

#[test]
fn no_trailing_newline_emitted() {
    let options = NiniOptions::default().with_newline(Newline::Lf);
    let text =
        to_string_with_options(&[Section::preamble(key_values! { "a" => "1" })], &options).unwrap();
    assert!(!text.ends_with('\n'));
}

#[test]
fn preset_fields_are_exact() {
    let default = NiniOptions::default();
    assert_eq!(default.separator, ':');
    assert_eq!(default.output_separator, ": ");
    assert_eq!(default.marker_style, MarkerStyle::AtSign);
    assert_eq!(default.encoding, Encoding::Utf8);

    let flat = NiniOptions::flat();
    assert_eq!(flat.output_separator, ":");
    assert_eq!(flat.marker_style, MarkerStyle::None);
    assert_eq!(flat.newline, Newline::CrLf);
    assert_eq!(flat.encoding, Encoding::Utf8WithBom);

    let ini = NiniOptions::ini();
    assert_eq!(ini.separator, '=');
    assert_eq!(ini.output_separator, "=");
    assert_eq!(ini.marker_style, MarkerStyle::IniBrackets);
    assert_eq!(ini.newline, Newline::CrLf);
    assert_eq!(ini.encoding, Encoding::Utf8);
}

#[test]
fn ini_preset_document() {
    let options = NiniOptions::ini();
    let sections = vec![Section::named(
        MarkerStyle::IniBrackets,
        "database",
        key_values! { "url" => "postgres://h/db", "pool" => "5" },
    )
    .unwrap()];
    let text = to_string_with_options(&sections, &options).unwrap();
    assert_eq!(text, "[database]\r\nurl=postgres://h/db\r\npool=5");
}

//! End-to-end tests over the public API: parsing, writing, presets, and the
//! error taxonomy.

use nini::{
    key_values, parse_str, parse_str_with_options, to_string, to_string_with_options, Comparison,
    Error, MarkerStyle, Newline, NiniOptions, Section,
};

fn lf(options: NiniOptions) -> NiniOptions {
    options.with_newline(Newline::Lf)
}

#[test]
fn parse_realistic_document() {
    let text = "\
# application configuration
name: demo
version: 1.2

@Server
host: localhost
port: 8080
; fallback host
banner: line one\\nline two

@Logging
level: debug";

    let sections = parse_str(text).unwrap();
    assert_eq!(sections.len(), 3);

    let preamble = &sections[0];
    assert!(preamble.is_preamble());
    assert_eq!(preamble.key_values().get("name"), Some("demo"));
    assert_eq!(preamble.key_values().get("VERSION"), Some("1.2"));

    let server = &sections[1];
    assert_eq!(server.name(), "Server");
    assert_eq!(server.key_values().get_i64("port"), Some(8080));
    assert_eq!(
        server.key_values().get("banner"),
        Some("line one\nline two")
    );

    assert_eq!(sections[2].name(), "Logging");
}

#[test]
fn mixed_line_endings_parse_identically() {
    let unix = parse_str("a: 1\n\n@S\nk: v").unwrap();
    let windows = parse_str("a: 1\r\n\r\n@S\r\nk: v").unwrap();
    let mac = parse_str("a: 1\r\r@S\rk: v").unwrap();
    assert_eq!(unix, windows);
    assert_eq!(unix, mac);
}

#[test]
fn round_trip_per_preset() {
    let presets = [lf(NiniOptions::default()), lf(NiniOptions::ini())];
    for options in presets {
        let sections = vec![
            Section::preamble(key_values! { "Name" => "value", "empty" => "" }),
            Section::named(
                options.marker_style,
                "Alpha",
                key_values! { "multi" => "a\nb", "tab" => "x\ty" },
            )
            .unwrap(),
            Section::named(options.marker_style, "Beta", key_values! {}).unwrap(),
        ];
        let text = to_string_with_options(&sections, &options).unwrap();
        let back = parse_str_with_options(&text, &options).unwrap();
        assert_eq!(back, sections, "round trip failed for {options:?}");
    }
}

#[test]
fn flat_preset_round_trip() {
    let options = lf(NiniOptions::flat());
    let sections = vec![Section::preamble(nini::KeyValueMap::from_pairs(
        Comparison::CaseSensitive,
        [("Key", "1"), ("key", "2")],
    ))];
    let text = to_string_with_options(&sections, &options).unwrap();
    assert_eq!(text, "Key:1\nkey:2");
    assert_eq!(parse_str_with_options(&text, &options).unwrap(), sections);
}

#[test]
fn flat_preset_treats_markers_as_content() {
    let options = NiniOptions::flat();
    let err = parse_str_with_options("@Section", &options).unwrap_err();
    // No marker styles: "@Section" is a key-value line with no separator.
    assert_eq!(err.line(), Some(1));
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn leading_whitespace_key_is_rejected_not_trimmed() {
    let err = parse_str(" Key: value").unwrap_err();
    assert!(matches!(err, Error::Format { line: 1, .. }));
}

#[test]
fn duplicate_key_error_references_line_two() {
    let err = parse_str("K:1\nK:2").unwrap_err();
    assert_eq!(err, Error::DuplicateKey { line: 2, key: "K".to_string() });
}

#[test]
fn error_line_numbers_count_blank_and_comment_lines() {
    let err = parse_str("# one\n\nok: fine\nbroken").unwrap_err();
    assert_eq!(err.line(), Some(4));
}

#[test]
fn value_may_contain_separator() {
    let sections = parse_str("url: http://example.com:8080/path").unwrap();
    assert_eq!(
        sections[0].key_values().get("url"),
        Some("http://example.com:8080/path")
    );
}

#[test]
fn crlf_newline_option_controls_output() {
    let options = NiniOptions::default().with_newline(Newline::CrLf);
    let sections = vec![Section::preamble(key_values! { "a" => "1", "b" => "2" })];
    let text = to_string_with_options(&sections, &options).unwrap();
    assert_eq!(text, "a: 1\r\nb: 2");
}

#[test]
fn sorting_is_opt_in() {
    let options = lf(NiniOptions::default())
        .with_sort_keys(true)
        .with_sort_sections(true);
    let sections = vec![
        Section::named(MarkerStyle::AtSign, "zeta", key_values! { "b" => "2", "a" => "1" })
            .unwrap(),
        Section::named(MarkerStyle::AtSign, "Alpha", key_values! { "k" => "v" }).unwrap(),
    ];
    let text = to_string_with_options(&sections, &options).unwrap();
    assert_eq!(text, "@Alpha\nk: v\n\n@zeta\na: 1\nb: 2");
}

#[test]
fn empty_document_yields_no_sections() {
    assert!(parse_str("").unwrap().is_empty());
    assert!(parse_str("\n\n# only comments\n\n").unwrap().is_empty());
    assert_eq!(to_string(&[]).unwrap(), "");
}

#[test]
fn preamble_with_no_keys_writes_nothing() {
    let sections = vec![Section::preamble(key_values! {})];
    assert_eq!(to_string(&sections).unwrap(), "");
}

#[test]
fn case_insensitive_lookup_with_preserved_spelling() {
    let sections = parse_str("@Server\nHost: a").unwrap();
    let map = sections[0].key_values();
    assert_eq!(map.get("host"), Some("a"));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Host"]);
}

#[test]
fn duplicate_sections_error_mentions_name_and_line() {
    let err = parse_str("@A\nk: 1\n\n@a\nk: 2").unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateSection { line: 4, name: "a".to_string() }
    );
}

#[test]
fn write_validation_is_atomic() {
    // One bad key anywhere fails the whole write before any output exists.
    let sections = vec![
        Section::named(MarkerStyle::AtSign, "Good", key_values! { "k" => "v" }).unwrap(),
        Section::named(MarkerStyle::AtSign, "Bad", key_values! { "k:colon" => "v" }).unwrap(),
    ];
    assert!(matches!(to_string(&sections), Err(Error::Validation(_))));
}

#[test]
fn invalid_options_rejected_at_entry() {
    let options = NiniOptions::default().with_output_separator("??");
    assert!(matches!(
        parse_str_with_options("k: v", &options),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        to_string_with_options(&[], &options),
        Err(Error::Validation(_))
    ));
}

#[test]
fn style_conversion_between_marker_styles() {
    let at = lf(NiniOptions::default());
    let brackets = lf(NiniOptions::default()).with_marker_style(MarkerStyle::IniBrackets);

    let sections = parse_str_with_options("@S\nk: v", &at).unwrap();
    let converted = to_string_with_options(&sections, &brackets).unwrap();
    assert_eq!(converted, "[S]\nk: v");
}

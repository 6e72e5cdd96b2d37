//! Format-specific escape/unescape codecs.
//!
//! [`escape`] and [`unescape`] are total functions over any string input:
//! empty in, empty out, and no input ever fails to decode. Decoding is
//! deliberately lenient — a malformed escape is emitted literally rather than
//! rejected, which keeps hand-edited files with stray backslashes
//! round-trippable.
//!
//! The [`EscapeMode::NiniValue`] codec is the one the key-value writer and
//! parser consume; the others cover the adjacent formats configuration values
//! commonly pass through.
//!
//! ## Examples
//!
//! ```rust
//! use nini::escape::{escape, unescape, EscapeMode};
//!
//! assert_eq!(escape("a\nb", EscapeMode::NiniValue), "a\\nb");
//! assert_eq!(unescape("a\\nb", EscapeMode::NiniValue), "a\nb");
//!
//! // Lenient decode: an unmapped escape keeps its backslash.
//! assert_eq!(unescape("C:\\x", EscapeMode::NiniValue), "C:\\x");
//! ```

use std::fmt::Write as _;

/// The escape codec to apply.
///
/// A closed enum: the format needs exactly these four codecs and no
/// open-ended plugin mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeMode {
    /// NINI value escaping: `\` → `\\`, LF → `\n`, CR → `\r`, TAB → `\t`.
    NiniValue,
    /// RFC 4180 CSV field quoting.
    Csv,
    /// Percent-encoding of everything outside `ALPHA / DIGIT / - . _ ~`.
    Url,
    /// HTML entity encoding of `& < > " '`.
    Html,
}

/// Encodes `text` under the given mode. Total over any input.
#[must_use]
pub fn escape(text: &str, mode: EscapeMode) -> String {
    match mode {
        EscapeMode::NiniValue => escape_nini(text),
        EscapeMode::Csv => escape_csv(text),
        EscapeMode::Url => escape_url(text),
        EscapeMode::Html => escape_html(text),
    }
}

/// Decodes `text` under the given mode. Total over any input; malformed
/// escapes are emitted literally.
#[must_use]
pub fn unescape(text: &str, mode: EscapeMode) -> String {
    match mode {
        EscapeMode::NiniValue => unescape_nini(text),
        EscapeMode::Csv => unescape_csv(text),
        EscapeMode::Url => unescape_url(text),
        EscapeMode::Html => unescape_html(text),
    }
}

fn escape_nini(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_nini(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            // Unmapped escape: keep the backslash, resume at the next
            // character.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn escape_csv(text: &str) -> String {
    if !text.contains([',', '"', '\n', '\r']) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

fn unescape_csv(text: &str) -> String {
    let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return text.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '"' {
            // A doubled quote decodes to one; a lone quote stays.
            chars.next();
        }
    }
    out
}

fn escape_url(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            other => {
                let _ = write!(out, "%{other:02X}");
            }
        }
    }
    out
}

fn unescape_url(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let pair = bytes.get(i + 1..i + 3);
            if let Some(value) = pair
                .and_then(|p| std::str::from_utf8(p).ok())
                .and_then(|p| u8::from_str_radix(p, 16).ok())
            {
                decoded.push(value);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match decode_entity(rest) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes one entity at the start of `text` (which begins with `&`),
/// returning the character and the byte length consumed.
fn decode_entity(text: &str) -> Option<(char, usize)> {
    let semicolon = text.find(';')?;
    let body = &text[1..semicolon];
    let consumed = semicolon + 1;
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, consumed))
}

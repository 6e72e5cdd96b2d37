//! File reading and writing honoring the configured [`Encoding`].
//!
//! The parsing core is pure; this module is the only place the crate touches
//! the filesystem. Both encodings are UTF-8 on the wire — they differ only in
//! the byte order mark, which is stripped on read (whatever the configured
//! encoding, tolerating files from either preset) and emitted on write for
//! [`Encoding::Utf8WithBom`].

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::{Encoding, NiniOptions};
use crate::sections::{parse_sections, write_sections, Section};

const BOM: char = '\u{feff}';

/// Reads a file as text, stripping a leading byte order mark if present.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read or is not valid UTF-8.
pub fn read_text(path: impl AsRef<Path>, _encoding: Encoding) -> Result<String> {
    let bytes = fs::read(path)?;
    let mut text = String::from_utf8(bytes).map_err(|e| Error::io(e.to_string()))?;
    if text.starts_with(BOM) {
        text.drain(..BOM.len_utf8());
    }
    Ok(text)
}

/// Writes text to a file, prefixing a byte order mark when the encoding asks
/// for one.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be written.
pub fn write_text(path: impl AsRef<Path>, text: &str, encoding: Encoding) -> Result<()> {
    match encoding {
        Encoding::Utf8 => fs::write(path, text)?,
        Encoding::Utf8WithBom => {
            let mut bytes = Vec::with_capacity(text.len() + BOM.len_utf8());
            let mut bom = [0u8; 4];
            bytes.extend_from_slice(BOM.encode_utf8(&mut bom).as_bytes());
            bytes.extend_from_slice(text.as_bytes());
            fs::write(path, bytes)?;
        }
    }
    Ok(())
}

/// Reads and parses a NINI file using the options' encoding.
///
/// # Errors
///
/// Any [`read_text`] or [`parse_sections`] error.
pub fn read_from_path(path: impl AsRef<Path>, options: &NiniOptions) -> Result<Vec<Section>> {
    let text = read_text(path, options.encoding)?;
    parse_sections(&text, options)
}

/// Writes sections to a NINI file using the options' encoding.
///
/// Validation runs before the file is touched, so a failed write leaves the
/// target untouched.
///
/// # Errors
///
/// Any [`write_sections`] or [`write_text`] error.
pub fn write_to_path(
    path: impl AsRef<Path>,
    sections: &[Section],
    options: &NiniOptions,
) -> Result<()> {
    let text = write_sections(sections, options)?;
    write_text(path, &text, options.encoding)
}

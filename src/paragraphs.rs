//! Paragraph splitting.
//!
//! A paragraph is a maximal run of non-blank lines; paragraphs are separated
//! by one or more blank lines, and blank runs at either edge of the input are
//! dropped. Splitting runs on the *raw* line sequence, before any whitespace
//! normalization — a line trimmed down to empty would otherwise corrupt the
//! paragraph boundaries.
//!
//! Each paragraph remembers the 1-based line number of its first line, so
//! downstream parse errors can point at the offending document line.

use crate::lines::{is_blank, Lines};

/// A maximal run of non-blank lines with its position in the document.
///
/// The lines are contiguous: line `i` of the paragraph is document line
/// `start_line + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// 1-based document line number of the first line.
    pub start_line: usize,
    /// The raw lines, terminators excluded.
    pub lines: Vec<&'a str>,
}

impl<'a> Paragraph<'a> {
    /// The 1-based document line number of line `index` of this paragraph.
    #[must_use]
    pub fn line_number(&self, index: usize) -> usize {
        self.start_line + index
    }
}

/// Splits `text` into paragraphs.
///
/// # Examples
///
/// ```rust
/// use nini::paragraphs::split_paragraphs;
///
/// let paragraphs = split_paragraphs("a\nb\n\n\nc\n");
/// assert_eq!(paragraphs.len(), 2);
/// assert_eq!(paragraphs[0].lines, vec!["a", "b"]);
/// assert_eq!(paragraphs[1].lines, vec!["c"]);
/// assert_eq!(paragraphs[1].start_line, 5);
/// ```
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph<'_>> = None;

    for (index, line) in Lines::new(text).enumerate() {
        let line_number = index + 1;
        if is_blank(line) {
            if let Some(done) = current.take() {
                paragraphs.push(done);
            }
            continue;
        }
        current
            .get_or_insert_with(|| Paragraph {
                start_line: line_number,
                lines: Vec::new(),
            })
            .lines
            .push(line);
    }
    if let Some(done) = current {
        paragraphs.push(done);
    }
    paragraphs
}

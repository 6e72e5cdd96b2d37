//! Line-processing policies: whitespace handling per line, blank-line
//! handling across lines.
//!
//! Each axis is independent — no axis constrains another:
//!
//! - [`LeadingWhitespace`], [`InnerWhitespace`] (with a replacement string),
//!   [`TrailingWhitespace`]: applied to every line, in that order.
//! - [`LeadingBlanks`], [`InnerBlanks`], [`TrailingBlanks`]: applied across
//!   the line sequence.
//!
//! ## Blank-run classification
//!
//! A line is *blank* iff it is empty or entirely whitespace, judged on the
//! raw line before any whitespace policy runs. Runs of blank lines are
//! classified three ways:
//!
//! - **leading** — before any visible line has been emitted,
//! - **inner** — followed by another visible line,
//! - **trailing** — followed by end of input.
//!
//! Inner and trailing cannot be told apart with one line of lookahead, so
//! [`ProcessedLines`] buffers each blank run in a FIFO of owned line copies
//! until a visible line or end of input resolves the classification. Owned
//! copies are required: the underlying raw slices are only valid until the
//! next advance.
//!
//! ## Examples
//!
//! ```rust
//! use nini::processing::{process_text, InnerBlanks, LineProcessingOptions, TrailingBlanks};
//! use nini::Newline;
//!
//! let options = LineProcessingOptions::default()
//!     .with_inner_blanks(InnerBlanks::Collapse)
//!     .with_trailing_blanks(TrailingBlanks::Remove)
//!     .with_newline(Newline::Lf);
//!
//! assert_eq!(process_text("A\n\n\nB\n\n", &options), "A\n\nB");
//! ```

use std::collections::VecDeque;

use crate::buffer::CharBuffer;
use crate::lines::{is_blank, Lines};
use crate::options::Newline;

/// Policy for whitespace at the start of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LeadingWhitespace {
    #[default]
    Preserve,
    Remove,
}

/// Policy for whitespace runs strictly between visible characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InnerWhitespace {
    #[default]
    Preserve,
    /// Replace each run with the configured replacement string.
    Collapse,
    Remove,
}

/// Policy for whitespace at the end of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrailingWhitespace {
    #[default]
    Preserve,
    Remove,
}

/// Policy for blank lines before the first visible line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LeadingBlanks {
    #[default]
    Preserve,
    Remove,
}

/// Policy for blank runs between visible lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InnerBlanks {
    #[default]
    Preserve,
    /// Replace each run with exactly one empty line.
    Collapse,
    Remove,
}

/// Policy for blank lines after the last visible line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrailingBlanks {
    #[default]
    Preserve,
    Remove,
}

/// Per-axis line-processing configuration.
///
/// The default preserves everything and joins with the platform newline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineProcessingOptions {
    pub leading_whitespace: LeadingWhitespace,
    pub inner_whitespace: InnerWhitespace,
    /// Replacement emitted for each inner run under
    /// [`InnerWhitespace::Collapse`].
    pub inner_whitespace_replacement: String,
    pub trailing_whitespace: TrailingWhitespace,
    pub leading_blanks: LeadingBlanks,
    pub inner_blanks: InnerBlanks,
    pub trailing_blanks: TrailingBlanks,
    /// Line terminator used by [`process_text`] when joining.
    pub newline: Newline,
}

impl Default for LineProcessingOptions {
    fn default() -> Self {
        LineProcessingOptions {
            leading_whitespace: LeadingWhitespace::Preserve,
            inner_whitespace: InnerWhitespace::Preserve,
            inner_whitespace_replacement: " ".to_string(),
            trailing_whitespace: TrailingWhitespace::Preserve,
            leading_blanks: LeadingBlanks::Preserve,
            inner_blanks: InnerBlanks::Preserve,
            trailing_blanks: TrailingBlanks::Preserve,
            newline: Newline::platform(),
        }
    }
}

impl LineProcessingOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_leading_whitespace(mut self, policy: LeadingWhitespace) -> Self {
        self.leading_whitespace = policy;
        self
    }

    #[must_use]
    pub fn with_inner_whitespace(mut self, policy: InnerWhitespace) -> Self {
        self.inner_whitespace = policy;
        self
    }

    #[must_use]
    pub fn with_inner_whitespace_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.inner_whitespace_replacement = replacement.into();
        self
    }

    #[must_use]
    pub fn with_trailing_whitespace(mut self, policy: TrailingWhitespace) -> Self {
        self.trailing_whitespace = policy;
        self
    }

    #[must_use]
    pub fn with_leading_blanks(mut self, policy: LeadingBlanks) -> Self {
        self.leading_blanks = policy;
        self
    }

    #[must_use]
    pub fn with_inner_blanks(mut self, policy: InnerBlanks) -> Self {
        self.inner_blanks = policy;
        self
    }

    #[must_use]
    pub fn with_trailing_blanks(mut self, policy: TrailingBlanks) -> Self {
        self.trailing_blanks = policy;
        self
    }

    #[must_use]
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }
}

/// Applies the per-line whitespace policies to one line.
///
/// Runs in a pooled [`CharBuffer`]: leading, then inner, then trailing.
#[must_use]
pub fn process_line(line: &str, options: &LineProcessingOptions) -> String {
    let mut buf = CharBuffer::from_str(line);

    if options.leading_whitespace == LeadingWhitespace::Remove {
        let leading = buf
            .as_slice()
            .iter()
            .take_while(|c| c.is_whitespace())
            .count();
        // remove_range cannot fail here: the run is a prefix of the buffer.
        let _ = buf.remove_range(0, leading);
    }

    if options.inner_whitespace != InnerWhitespace::Preserve {
        collapse_inner(&mut buf, options);
    }

    if options.trailing_whitespace == TrailingWhitespace::Remove {
        let trailing = buf
            .as_slice()
            .iter()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();
        let _ = buf.remove_range(buf.len() - trailing, trailing);
    }

    buf.to_owned_string()
}

/// Rewrites whitespace runs strictly between visible characters.
fn collapse_inner(buf: &mut CharBuffer, options: &LineProcessingOptions) {
    let Some(first) = buf.as_slice().iter().position(|c| !c.is_whitespace()) else {
        return;
    };
    let mut i = first + 1;
    while i < buf.len() {
        let Some(ch) = buf.get(i) else { break };
        if !ch.is_whitespace() {
            i += 1;
            continue;
        }
        let run = buf
            .as_slice()
            .iter()
            .skip(i)
            .take_while(|c| c.is_whitespace())
            .count();
        if i + run == buf.len() {
            // Trailing run: not inner, left to the trailing policy.
            break;
        }
        let _ = buf.remove_range(i, run);
        match options.inner_whitespace {
            InnerWhitespace::Collapse => {
                let _ = buf.insert_str(i, &options.inner_whitespace_replacement);
                i += options.inner_whitespace_replacement.chars().count();
            }
            InnerWhitespace::Remove => {}
            InnerWhitespace::Preserve => unreachable!("filtered by caller"),
        }
    }
}

/// Iterator adapter applying the full policy set over a line sequence.
///
/// Yields owned processed lines. Blank runs after the first visible line are
/// buffered in a FIFO until the run is classified as inner or trailing; see
/// the [module documentation](self).
#[derive(Debug)]
pub struct ProcessedLines<'a> {
    raw: Lines<'a>,
    options: LineProcessingOptions,
    emitted_visible: bool,
    exhausted: bool,
    /// Blank run awaiting classification.
    pending: VecDeque<String>,
    /// Lines staged for emission.
    ready: VecDeque<String>,
}

impl<'a> ProcessedLines<'a> {
    /// Creates a processed-line iterator over `text`.
    #[must_use]
    pub fn new(text: &'a str, options: &LineProcessingOptions) -> Self {
        ProcessedLines {
            raw: Lines::new(text),
            options: options.clone(),
            emitted_visible: false,
            exhausted: false,
            pending: VecDeque::new(),
            ready: VecDeque::new(),
        }
    }
}

impl Iterator for ProcessedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(staged) = self.ready.pop_front() {
                return Some(staged);
            }
            if self.exhausted {
                return None;
            }
            let Some(raw_line) = self.raw.next() else {
                self.exhausted = true;
                match self.options.trailing_blanks {
                    TrailingBlanks::Preserve => self.ready.extend(self.pending.drain(..)),
                    TrailingBlanks::Remove => self.pending.clear(),
                }
                continue;
            };
            let blank = is_blank(raw_line);
            let processed = process_line(raw_line, &self.options);
            if blank {
                if self.emitted_visible {
                    self.pending.push_back(processed);
                } else if self.options.leading_blanks == LeadingBlanks::Preserve {
                    return Some(processed);
                }
                continue;
            }
            if !self.pending.is_empty() {
                match self.options.inner_blanks {
                    InnerBlanks::Preserve => self.ready.extend(self.pending.drain(..)),
                    InnerBlanks::Collapse => {
                        self.pending.clear();
                        self.ready.push_back(String::new());
                    }
                    InnerBlanks::Remove => self.pending.clear(),
                }
            }
            self.emitted_visible = true;
            self.ready.push_back(processed);
        }
    }
}

impl std::iter::FusedIterator for ProcessedLines<'_> {}

/// Processes `text` and joins the resulting lines with the configured
/// newline.
#[must_use]
pub fn process_text(text: &str, options: &LineProcessingOptions) -> String {
    let lines: Vec<String> = ProcessedLines::new(text, options).collect();
    lines.join(options.newline.as_str())
}

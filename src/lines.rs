//! Zero-copy line splitting.
//!
//! [`Lines`] splits raw text into line slices, recognizing all three line
//! ending conventions — `\r\n`, bare `\n`, and bare `\r` — even when mixed
//! within a single input. A naive single-character split mishandles mixed
//! inputs; this iterator is the one splitting authority for the whole crate,
//! so paragraph boundaries and line counts always agree with it.
//!
//! Line endings are *terminators*, not separators:
//!
//! - a trailing terminator at end of input produces no extra empty line,
//! - empty input produces zero lines,
//! - two consecutive terminators produce exactly one empty line between them.
//!
//! Each yielded slice excludes the terminator bytes.
//!
//! ## Examples
//!
//! ```rust
//! use nini::lines::Lines;
//!
//! let lines: Vec<&str> = Lines::new("a\r\nb\rc\n").collect();
//! assert_eq!(lines, vec!["a", "b", "c"]);
//!
//! assert_eq!(Lines::new("").count(), 0);
//! assert_eq!(Lines::new("\n\n").collect::<Vec<_>>(), vec!["", ""]);
//! ```

/// Lazy, finite, non-restartable iterator over the lines of a string slice.
///
/// See the [module documentation](self) for the terminator semantics.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Lines<'a> {
    /// Creates a line iterator over `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Lines {
            rest: if text.is_empty() { None } else { Some(text) },
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.take()?;
        match rest.find(['\n', '\r']) {
            None => Some(rest),
            Some(at) => {
                let line = &rest[..at];
                let terminator_len = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                let remainder = &rest[at + terminator_len..];
                if !remainder.is_empty() {
                    self.rest = Some(remainder);
                }
                Some(line)
            }
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}

/// Counts the lines of `text` under the same terminator semantics as
/// [`Lines`].
///
/// # Examples
///
/// ```rust
/// use nini::lines::line_count;
///
/// assert_eq!(line_count(""), 0);
/// assert_eq!(line_count("a\nb"), 2);
/// assert_eq!(line_count("a\nb\n"), 2);
/// ```
#[must_use]
pub fn line_count(text: &str) -> usize {
    Lines::new(text).count()
}

/// Whether a line is blank: empty or entirely whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        Lines::new(text).collect()
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(split("").is_empty());
    }

    #[test]
    fn trailing_terminator_yields_no_extra_line() {
        assert_eq!(split("a\n"), vec!["a"]);
        assert_eq!(split("a\r\n"), vec!["a"]);
        assert_eq!(split("a\r"), vec!["a"]);
    }

    #[test]
    fn consecutive_terminators_yield_one_empty_line() {
        assert_eq!(split("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split("\n"), vec![""]);
        assert_eq!(split("\r\n\r\n"), vec!["", ""]);
    }

    #[test]
    fn mixed_conventions() {
        assert_eq!(split("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
        // \r followed by \n is one terminator; \n followed by \r is two.
        assert_eq!(split("a\n\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn slices_exclude_terminators() {
        for line in Lines::new("x\r\ny\nz\r") {
            assert!(!line.contains(['\n', '\r']));
        }
    }

    #[test]
    fn count_agrees_with_iterator() {
        for text in ["", "a", "a\n", "a\n\n", "\r\n", "a\rb\nc\r\n"] {
            assert_eq!(line_count(text), Lines::new(text).count());
        }
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" x "));
    }
}

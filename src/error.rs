//! Error types for NINI parsing and writing.
//!
//! Every parse failure is fatal to that parse call — there is no
//! partial-document recovery. Parse errors carry the 1-based line number of
//! the offending line; write-time validation errors are raised before any
//! output is produced, so writing is atomic with respect to validation.
//!
//! ## Error Categories
//!
//! - **Format errors**: missing separator, empty key, malformed section
//!   marker — always with a line number
//! - **Duplicate errors**: the same key (or section name) seen twice within
//!   one parse, compared with the configured comparer
//! - **Validation errors**: illegal keys, section names, or options detected
//!   at write time
//! - **Range errors**: out-of-range access on a [`CharBuffer`](crate::CharBuffer)
//! - **I/O errors**: file reading/writing failures
//!
//! ## Examples
//!
//! ```rust
//! use nini::{parse_str, Error};
//!
//! let result = parse_str("broken line without a separator");
//! match result {
//!     Err(Error::Format { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("expected a format error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised while parsing or writing NINI text.
///
/// Parse-side variants carry the 1-based line number of the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed line encountered during parsing.
    #[error("format error at line {line}: {msg}")]
    Format { line: usize, msg: String },

    /// The same key appeared twice within one parsed section.
    #[error("duplicate key {key:?} at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// Two sections with the same name within one parsed document.
    #[error("duplicate section {name:?} at line {line}")]
    DuplicateSection { line: usize, name: String },

    /// Illegal key, section name, or option combination detected at write time.
    #[error("validation error: {0}")]
    Validation(String),

    /// Out-of-range access on a character buffer.
    #[error("range error: start {start} + length {len} exceeds buffer length {used}")]
    Range {
        start: usize,
        len: usize,
        used: usize,
    },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a format error carrying the 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nini::Error;
    ///
    /// let err = Error::format(3, "missing separator ':'");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn format(line: usize, msg: impl Into<String>) -> Self {
        Error::Format {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a duplicate-key error for the given line.
    pub fn duplicate_key(line: usize, key: impl Into<String>) -> Self {
        Error::DuplicateKey {
            line,
            key: key.into(),
        }
    }

    /// Creates a duplicate-section error for the given line.
    pub fn duplicate_section(line: usize, name: impl Into<String>) -> Self {
        Error::DuplicateSection {
            line,
            name: name.into(),
        }
    }

    /// Creates a write-time validation error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nini::Error;
    ///
    /// let err = Error::validation("key must not be empty");
    /// assert!(err.to_string().contains("key must not be empty"));
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Creates a buffer range error.
    pub fn range(start: usize, len: usize, used: usize) -> Self {
        Error::Range { start, len, used }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// The 1-based line number this error refers to, if it is a parse error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nini::Error;
    ///
    /// assert_eq!(Error::format(7, "bad marker").line(), Some(7));
    /// assert_eq!(Error::validation("bad key").line(), None);
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Format { line, .. }
            | Error::DuplicateKey { line, .. }
            | Error::DuplicateSection { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

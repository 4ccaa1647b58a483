//! Error types for SNBT parsing, writing and tag conversion.
//!
//! Every parse failure aborts the whole parse: a partially built tree has no
//! well-defined meaning, so the parser never hands one back.
//!
//! ## Error Context
//!
//! Parse errors carry:
//! - 1-based line and column of the failure
//! - the tail of the text consumed so far
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{from_str, Error};
//!
//! let result = from_str("{\"a\":");
//! assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
//!
//! if let Err(err) = from_str("\"abc") {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use crate::tag::TagKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input ran out in the middle of a token or structure
    #[error(
        "Unexpected end of input at line {line}, column {col}\n{context}\nExpected: {expected}"
    )]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
        context: String,
    },

    /// A quoted string was opened but never closed
    #[error("Unterminated string starting at line {line}, column {col}\n{context}")]
    UnterminatedString {
        line: usize,
        col: usize,
        context: String,
    },

    /// No characters matched where a token was required
    #[error("Expected {expected} at line {line}, column {col} but found no token\n{context}")]
    EmptyToken {
        line: usize,
        col: usize,
        expected: String,
        context: String,
    },

    /// A numeric literal does not fit its declared width
    #[error("Invalid {expected} literal '{literal}' at line {line}, column {col}\n{context}")]
    NumberFormat {
        line: usize,
        col: usize,
        literal: String,
        expected: TagKind,
        context: String,
    },

    /// A character that no grammar rule accepts at this point
    #[error("Unexpected token '{found}' at line {line}, column {col}: {msg}\n{context}")]
    UnexpectedToken {
        line: usize,
        col: usize,
        found: char,
        msg: String,
        context: String,
    },

    /// Compounds and lists nested deeper than the configured limit
    #[error("Nesting depth exceeds the limit of {limit} at line {line}, column {col}")]
    DepthLimitExceeded { line: usize, col: usize, limit: usize },

    /// A list element whose kind differs from the list's first element
    #[error("List of {expected} tags cannot hold a {found} tag")]
    ListKindMismatch { expected: TagKind, found: TagKind },

    /// A conversion was applied to a tag of the wrong kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TagKind, found: TagKind },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str, context: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an unterminated string error, located at the opening quote.
    pub fn unterminated_string(line: usize, col: usize, context: &str) -> Self {
        Error::UnterminatedString {
            line,
            col,
            context: context.to_string(),
        }
    }

    /// Creates an empty token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Error;
    ///
    /// let err = Error::empty_token(1, 2, "a compound key", "{");
    /// assert!(err.to_string().contains("a compound key"));
    /// ```
    pub fn empty_token(line: usize, col: usize, expected: &str, context: &str) -> Self {
        Error::EmptyToken {
            line,
            col,
            expected: expected.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a number format error for a literal that does not parse at
    /// the width of `expected`.
    pub fn number_format(
        line: usize,
        col: usize,
        literal: &str,
        expected: TagKind,
        context: &str,
    ) -> Self {
        Error::NumberFormat {
            line,
            col,
            literal: literal.to_string(),
            expected,
            context: context.to_string(),
        }
    }

    /// Creates an unexpected token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Error;
    ///
    /// let err = Error::unexpected_token(3, 7, '}', "expected ':' after key", "{a");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn unexpected_token(line: usize, col: usize, found: char, msg: &str, context: &str) -> Self {
        Error::UnexpectedToken {
            line,
            col,
            found,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while parsing text.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEof { .. }
                | Error::UnterminatedString { .. }
                | Error::EmptyToken { .. }
                | Error::NumberFormat { .. }
                | Error::UnexpectedToken { .. }
                | Error::DepthLimitExceeded { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

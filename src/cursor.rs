//! Position-tracked view over SNBT input.
//!
//! [`Cursor`] is the only thing the parser uses to touch the input. It keeps a
//! byte position plus 1-based line and column so every error can say where it
//! happened, and offers bounded lookahead through [`Cursor::peek_n`] and
//! snapshot/restore through [`Cursor::mark`] and [`Cursor::reset`].
//!
//! ## Examples
//!
//! ```rust
//! use snbt::cursor::Cursor;
//!
//! let mut cursor = Cursor::new("[B; 1b]");
//! assert_eq!(cursor.peek_n::<3>().unwrap(), ['[', 'B', ';']);
//!
//! let mark = cursor.mark();
//! cursor.consume_n::<3>().unwrap();
//! cursor.skip_whitespace();
//! assert_eq!(cursor.peek().unwrap(), '1');
//!
//! cursor.reset(mark);
//! assert_eq!(cursor.position(), 0);
//! ```

use crate::tokens;
use crate::{Error, Result};

/// How many trailing characters of consumed input an error message shows.
const CONTEXT_CHARS: usize = 48;

/// A saved cursor location, restored with [`Cursor::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    position: usize,
    line: usize,
    column: usize,
}

/// A mutable read position over borrowed text.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Byte offset of the next character.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The text already consumed.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> &'a str {
        &self.input[..self.position]
    }

    /// The text not yet consumed.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns the next character without advancing.
    pub fn peek(&self) -> Result<char> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| self.unexpected_eof("more input"))
    }

    /// Returns exactly `N` upcoming characters without advancing.
    pub fn peek_n<const N: usize>(&self) -> Result<[char; N]> {
        let mut chars = self.remaining().chars();
        let mut out = ['\0'; N];
        for slot in out.iter_mut() {
            *slot = chars
                .next()
                .ok_or_else(|| self.unexpected_eof(&format!("{N} more characters")))?;
        }
        Ok(out)
    }

    /// Advances past one character and returns it.
    pub fn consume(&mut self) -> Result<char> {
        let ch = self.peek()?;
        self.advance(ch);
        Ok(ch)
    }

    /// Advances past exactly `N` characters and returns them. On failure the
    /// cursor does not move.
    pub fn consume_n<const N: usize>(&mut self) -> Result<[char; N]> {
        let chars = self.peek_n::<N>()?;
        for ch in chars {
            self.advance(ch);
        }
        Ok(chars)
    }

    /// Skips a maximal run of format characters. Reaching the end of input
    /// inside the run is not an error.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.remaining().chars().next() {
            if !tokens::is_format_char(ch) {
                break;
            }
            self.advance(ch);
        }
    }

    /// Consumes the longest prefix whose characters satisfy `pred`.
    pub fn take_while<F>(&mut self, mut pred: F) -> &'a str
    where
        F: FnMut(char) -> bool,
    {
        let start = self.position;
        while let Some(ch) = self.remaining().chars().next() {
            if !pred(ch) {
                break;
            }
            self.advance(ch);
        }
        &self.input[start..self.position]
    }

    /// Snapshots the current location. The parser rewinds to such a mark
    /// before reporting a bad array element or an unterminated string, so the
    /// error points at where the token began.
    #[inline]
    #[must_use]
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    pub fn reset(&mut self, mark: Mark) {
        self.position = mark.position;
        self.line = mark.line;
        self.column = mark.column;
    }

    /// The tail of the consumed input, for diagnostics.
    #[must_use]
    pub fn context(&self) -> String {
        let consumed = self.consumed();
        match consumed.char_indices().rev().nth(CONTEXT_CHARS - 1) {
            Some((start, _)) if start > 0 => format!("...{}", &consumed[start..]),
            _ => consumed.to_string(),
        }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn unexpected_eof(&self, expected: &str) -> Error {
        Error::unexpected_eof(self.line, self.column, expected, &self.context())
    }

    fn advance(&mut self, ch: char) {
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek().unwrap(), 'a');
        assert_eq!(cursor.peek().unwrap(), 'a');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_peek_at_end_fails() {
        let cursor = Cursor::new("");
        assert!(matches!(cursor.peek(), Err(Error::UnexpectedEof { .. })));
    }

    #[test]
    fn test_peek_n_requires_enough_input() {
        let cursor = Cursor::new("[]");
        assert_eq!(cursor.peek_n::<2>().unwrap(), ['[', ']']);
        assert!(matches!(
            cursor.peek_n::<3>(),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_consume_n_is_all_or_nothing() {
        let mut cursor = Cursor::new("ab");
        assert!(cursor.consume_n::<3>().is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.consume_n::<2>().unwrap(), ['a', 'b']);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_whitespace_tolerates_end() {
        let mut cursor = Cursor::new(" \t\r\n\0");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut cursor = Cursor::new("{\n\ta: 1\n}");
        cursor.consume().unwrap();
        cursor.skip_whitespace();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
        assert_eq!(cursor.take_while(|c| c.is_ascii_alphabetic()), "a");
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_mark_and_reset() {
        let mut cursor = Cursor::new("x\ny");
        let mark = cursor.mark();
        cursor.consume_n::<3>().unwrap();
        assert_eq!(cursor.line(), 2);
        cursor.reset(mark);
        assert_eq!((cursor.position(), cursor.line(), cursor.column()), (0, 1, 1));
    }

    #[test]
    fn test_multibyte_positions() {
        let mut cursor = Cursor::new("\"é\"");
        cursor.consume().unwrap();
        assert_eq!(cursor.consume().unwrap(), 'é');
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), "\"");
    }

    #[test]
    fn test_context_is_truncated() {
        let input = "a".repeat(100);
        let mut cursor = Cursor::new(&input);
        cursor.take_while(|_| true);
        let context = cursor.context();
        assert!(context.starts_with("..."));
        assert_eq!(context.len(), 3 + CONTEXT_CHARS);

        let mut short = Cursor::new("{a");
        short.take_while(|_| true);
        assert_eq!(short.context(), "{a");
    }
}

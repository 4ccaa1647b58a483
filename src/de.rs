//! SNBT parsing.
//!
//! This module provides the [`Parser`], a hand-written recursive-descent
//! parser that builds a [`Tag`] tree from SNBT text.
//!
//! ## Overview
//!
//! - **Primary dispatch** on the first character: `{` compound, `[` array or
//!   list, a quote starts a string, anything else allowed in a bare token goes
//!   through the literal classifier
//! - **Bounded lookahead**: `[` is resolved with at most three characters of
//!   lookahead into an empty list, a typed array (`[B;`, `[I;`, `[L;`) or a
//!   general list
//! - **Attempt-then-fallback literals**: a bare token is tried as a number of
//!   the width its suffix names and becomes a string only if that fails
//! - **Fail fast**: the first error aborts the parse with line, column and the
//!   consumed text for context
//!
//! ## Usage
//!
//! Most users should use the crate-level functions:
//!
//! ```rust
//! use snbt::{from_str, Tag};
//!
//! let tag = from_str("{Count: 3b, id: \"minecraft:stone\"}").unwrap();
//! let item = tag.as_compound().unwrap();
//! assert_eq!(item.get("Count"), Some(&Tag::Byte(3)));
//! ```
//!
//! ## Literal Classification
//!
//! ```rust
//! use snbt::{from_str, Tag};
//!
//! assert_eq!(from_str("5").unwrap(), Tag::Int(5));
//! assert_eq!(from_str("5.0").unwrap(), Tag::Double(5.0));
//! assert_eq!(from_str("5b").unwrap(), Tag::Byte(5));
//! assert_eq!(from_str("5L").unwrap(), Tag::Long(5));
//! assert_eq!(from_str("true").unwrap(), Tag::Byte(1));
//! assert_eq!(from_str("300b").unwrap(), Tag::from("300b"));
//! ```

use crate::buffer::{ByteBuffer, GrowableBuffer, IntBuffer, LongBuffer};
use crate::cursor::{Cursor, Mark};
use crate::tokens::{
    self, ARRAY_BEGIN, ARRAY_END, ARRAY_SIGNATURE_SEPARATOR, COMPOUND_BEGIN, COMPOUND_END,
    DOUBLE_QUOTE, ESCAPE_MARKER, KEY_VALUE_SEPARATOR, LITERAL_FALSE, LITERAL_INFINITY,
    LITERAL_NAN, LITERAL_TRUE, SINGLE_QUOTE, TYPE_BYTE, TYPE_BYTE_UPPER, TYPE_DOUBLE, TYPE_FLOAT,
    TYPE_INT, TYPE_INT_UPPER, TYPE_LONG, TYPE_LONG_UPPER, TYPE_SHORT, VALUE_SEPARATOR,
};
use crate::{Compound, Error, List, Result, SnbtOptions, Tag, TagKind};
use std::str::FromStr;

/// The SNBT parser.
///
/// A parser is single-use: [`Parser::parse`] consumes it.
///
/// # Examples
///
/// ```rust
/// use snbt::{Parser, SnbtOptions, Error};
///
/// let nested = "[".repeat(10) + &"]".repeat(10);
/// let options = SnbtOptions::new().with_max_depth(4);
/// let result = Parser::with_options(&nested, &options).parse();
/// assert!(matches!(result, Err(Error::DepthLimitExceeded { limit: 4, .. })));
/// ```
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &SnbtOptions::default())
    }

    pub fn with_options(input: &'a str, options: &SnbtOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses the whole input as a single root tag.
    ///
    /// Whitespace around the root tag is ignored; anything else after it is
    /// an error.
    pub fn parse(mut self) -> Result<Tag> {
        match self.parse_document() {
            Ok(tag) => {
                tracing::trace!(
                    bytes = self.cursor.position(),
                    kind = %tag.kind(),
                    "parsed SNBT document"
                );
                Ok(tag)
            }
            Err(err) => {
                tracing::debug!(
                    line = self.cursor.line(),
                    column = self.cursor.column(),
                    consumed = %self.cursor.context(),
                    error = %err,
                    "SNBT parse failed"
                );
                Err(err)
            }
        }
    }

    fn parse_document(&mut self) -> Result<Tag> {
        let tag = self.parse_tag()?;
        self.cursor.skip_whitespace();
        if let Some(ch) = self.cursor.remaining().chars().next() {
            return Err(self.unexpected(ch, "trailing characters after the root tag"));
        }
        Ok(tag)
    }

    fn parse_tag(&mut self) -> Result<Tag> {
        self.cursor.skip_whitespace();
        match self.peek_expecting("a value")? {
            COMPOUND_BEGIN => self.parse_compound().map(Tag::Compound),
            ARRAY_BEGIN => self.parse_array_or_list(),
            DOUBLE_QUOTE | SINGLE_QUOTE => self.parse_quoted_string().map(Tag::String),
            ch if tokens::is_allowed_in_unquoted(ch) => self.parse_literal(),
            ch => Err(self.unexpected(ch, "expected a value")),
        }
    }

    fn parse_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        self.cursor.consume()?; // `{`
        let mut compound = Compound::new();

        self.cursor.skip_whitespace();
        while self.peek_expecting("'}'")? != COMPOUND_END {
            let name = self.parse_string("a compound key")?;
            self.cursor.skip_whitespace();
            self.expect(KEY_VALUE_SEPARATOR, "expected ':' after compound key")?;
            let tag = self.parse_tag()?;
            compound.insert(name, tag);
            self.skip_value_separator()?;
        }

        self.cursor.consume()?; // `}`
        self.leave();
        Ok(compound)
    }

    fn parse_array_or_list(&mut self) -> Result<Tag> {
        let [_, second] = self.cursor.peek_n::<2>()?;
        if second == ARRAY_END {
            self.cursor.consume_n::<2>()?; // `[]`
            return Ok(Tag::List(List::new()));
        }

        let [_, marker, separator] = self.cursor.peek_n::<3>()?;
        if separator == ARRAY_SIGNATURE_SEPARATOR
            && matches!(marker, TYPE_BYTE_UPPER | TYPE_INT_UPPER | TYPE_LONG_UPPER)
        {
            return self.parse_typed_array_tag(marker);
        }

        self.parse_list().map(Tag::List)
    }

    // Leaves stay out of line; parse_tag, parse_array_or_list, parse_list
    // and parse_compound recurse once per nesting level.

    #[inline(never)]
    fn parse_literal(&mut self) -> Result<Tag> {
        let token = self.parse_unquoted_string("a value")?;
        Ok(classify_literal(token))
    }

    #[inline(never)]
    fn parse_typed_array_tag(&mut self, marker: char) -> Result<Tag> {
        match marker {
            TYPE_BYTE_UPPER => self
                .parse_typed_array(ByteBuffer::new(), TagKind::Byte, decode_byte_element)
                .map(Tag::ByteArray),
            TYPE_INT_UPPER => self
                .parse_typed_array(IntBuffer::new(), TagKind::Int, decode_int_element)
                .map(Tag::IntArray),
            _ => self
                .parse_typed_array(LongBuffer::new(), TagKind::Long, decode_long_element)
                .map(Tag::LongArray),
        }
    }

    fn parse_typed_array<T: Copy>(
        &mut self,
        mut buffer: GrowableBuffer<T>,
        element: TagKind,
        decode: fn(&str) -> Option<T>,
    ) -> Result<Box<[T]>> {
        self.cursor.consume_n::<3>()?; // `[B;`, `[I;` or `[L;`

        self.cursor.skip_whitespace();
        while self.peek_expecting("']'")? != ARRAY_END {
            let start = self.cursor.mark();
            let literal = self.cursor.take_while(tokens::is_allowed_in_unquoted);
            let value = match decode(literal) {
                Some(value) => value,
                None => return Err(self.invalid_element(start, literal, element)),
            };
            buffer.push(value);
            self.skip_value_separator()?;
        }

        self.cursor.consume()?; // `]`
        Ok(buffer.into_boxed_slice())
    }

    fn parse_list(&mut self) -> Result<List> {
        self.enter()?;
        self.cursor.consume()?; // `[`
        let mut list = List::new();

        self.cursor.skip_whitespace();
        while self.peek_expecting("']'")? != ARRAY_END {
            let tag = self.parse_tag()?;
            list.push(tag)?;
            self.skip_value_separator()?;
        }

        self.cursor.consume()?; // `]`
        self.leave();
        Ok(list)
    }

    /// A compound key: quoted or bare.
    fn parse_string(&mut self, expected: &str) -> Result<String> {
        self.cursor.skip_whitespace();
        match self.peek_expecting(expected)? {
            DOUBLE_QUOTE | SINGLE_QUOTE => self.parse_quoted_string(),
            _ => self.parse_unquoted_string(expected).map(str::to_string),
        }
    }

    fn parse_unquoted_string(&mut self, expected: &str) -> Result<&'a str> {
        let token = self.cursor.take_while(tokens::is_allowed_in_unquoted);
        if token.is_empty() {
            return Err(self.empty_token(expected));
        }
        Ok(token)
    }

    /// Only the active quote character can be escaped; a backslash before
    /// anything else is kept verbatim together with that character.
    #[inline(never)]
    fn parse_quoted_string(&mut self) -> Result<String> {
        let start = self.cursor.mark();
        let quote = self.cursor.consume()?;
        let mut result = String::new();
        let mut escaped = false;

        while !self.cursor.is_at_end() {
            let ch = self.cursor.consume()?;
            if escaped {
                if ch != quote {
                    result.push(ESCAPE_MARKER);
                }
                result.push(ch);
                escaped = false;
            } else if ch == ESCAPE_MARKER {
                escaped = true;
            } else if ch == quote {
                return Ok(result);
            } else {
                result.push(ch);
            }
        }

        Err(self.unterminated_string(start))
    }

    /// Skips whitespace, at most one `,`, and whitespace again.
    fn skip_value_separator(&mut self) -> Result<()> {
        self.cursor.skip_whitespace();
        if self.cursor.remaining().starts_with(VALUE_SEPARATOR) {
            self.cursor.consume()?;
            self.cursor.skip_whitespace();
        }
        Ok(())
    }

    fn expect(&mut self, expected: char, msg: &str) -> Result<()> {
        let ch = self.peek_expecting(msg)?;
        if ch != expected {
            return Err(self.unexpected(ch, msg));
        }
        self.cursor.consume()?;
        Ok(())
    }

    fn peek_expecting(&self, expected: &str) -> Result<char> {
        match self.cursor.remaining().chars().next() {
            Some(ch) => Ok(ch),
            None => Err(self.cursor.unexpected_eof(expected)),
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.depth_exceeded());
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    #[cold]
    #[inline(never)]
    fn depth_exceeded(&self) -> Error {
        Error::DepthLimitExceeded {
            line: self.cursor.line(),
            col: self.cursor.column(),
            limit: self.max_depth,
        }
    }

    #[cold]
    #[inline(never)]
    fn empty_token(&self, expected: &str) -> Error {
        Error::empty_token(
            self.cursor.line(),
            self.cursor.column(),
            expected,
            &self.cursor.context(),
        )
    }

    /// Rewinds to the opening quote so the error points at it.
    #[cold]
    #[inline(never)]
    fn unterminated_string(&mut self, start: Mark) -> Error {
        self.cursor.reset(start);
        Error::unterminated_string(
            self.cursor.line(),
            self.cursor.column(),
            &self.cursor.context(),
        )
    }

    /// Rewinds to the start of the rejected array element.
    #[cold]
    #[inline(never)]
    fn invalid_element(&mut self, start: Mark, literal: &str, element: TagKind) -> Error {
        let shown = if literal.is_empty() {
            self.cursor.peek().map(String::from).unwrap_or_default()
        } else {
            literal.to_string()
        };
        self.cursor.reset(start);
        Error::number_format(
            self.cursor.line(),
            self.cursor.column(),
            &shown,
            element,
            &self.cursor.context(),
        )
    }

    #[cold]
    #[inline(never)]
    fn unexpected(&self, found: char, msg: &str) -> Error {
        Error::unexpected_token(
            self.cursor.line(),
            self.cursor.column(),
            found,
            msg,
            &self.cursor.context(),
        )
    }
}

/// Turns a bare token into a tag.
///
/// `true`/`false` become bytes. A token ending in a digit is an int, or a
/// double when it does not fit. Otherwise the lowercased last character picks
/// the width (`b s i l f d`). Whenever the numeric reading fails the whole
/// token, suffix included, is a string.
fn classify_literal(token: &str) -> Tag {
    match token {
        LITERAL_TRUE => return Tag::Byte(1),
        LITERAL_FALSE => return Tag::Byte(0),
        _ => {}
    }

    let Some(last) = token.chars().next_back() else {
        return Tag::String(String::new());
    };

    if last.is_ascii_digit() {
        if let Ok(v) = token.parse::<i32>() {
            return Tag::Int(v);
        }
        return match parse_float_literal::<f64>(token) {
            Some(v) => Tag::Double(v),
            None => Tag::String(token.to_string()),
        };
    }

    let body = &token[..token.len() - last.len_utf8()];
    let parsed = match last.to_ascii_lowercase() {
        TYPE_BYTE => body.parse().ok().map(Tag::Byte),
        TYPE_SHORT => body.parse().ok().map(Tag::Short),
        TYPE_INT => body.parse().ok().map(Tag::Int),
        TYPE_LONG => body.parse().ok().map(Tag::Long),
        TYPE_FLOAT => parse_float_literal(body).map(Tag::Float),
        TYPE_DOUBLE => parse_float_literal(body).map(Tag::Double),
        _ => None,
    };
    parsed.unwrap_or_else(|| Tag::String(token.to_string()))
}

/// Decimal notation with optional exponent, or a signed `NaN`/`Infinity`.
///
/// A decimal may carry one more `f`/`F`/`d`/`D` type letter of its own, so
/// `5ff` reads as a float and `1.5dd` as a double. Hexadecimal floats are not
/// recognised. Words the standard library would also accept (`inf`, `nan`)
/// are rejected.
fn parse_float_literal<T: FromStr>(literal: &str) -> Option<T> {
    let unsigned = literal
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(literal);
    if unsigned == LITERAL_NAN || unsigned == LITERAL_INFINITY {
        return literal.parse().ok();
    }

    let is_type_letter = |c: char| matches!(c, 'f' | 'F' | 'd' | 'D');
    let literal = literal.strip_suffix(is_type_letter).unwrap_or(literal);
    let unsigned = unsigned.strip_suffix(is_type_letter).unwrap_or(unsigned);
    let is_decimal = !unsigned.is_empty()
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return None;
    }
    literal.parse().ok()
}

fn decode_byte_element(literal: &str) -> Option<i8> {
    literal
        .strip_suffix(|c: char| c == TYPE_BYTE || c == TYPE_BYTE_UPPER)?
        .parse()
        .ok()
}

fn decode_int_element(literal: &str) -> Option<i32> {
    literal
        .strip_suffix(|c: char| c == TYPE_INT || c == TYPE_INT_UPPER)
        .unwrap_or(literal)
        .parse()
        .ok()
}

fn decode_long_element(literal: &str) -> Option<i64> {
    literal
        .strip_suffix(|c: char| c == TYPE_LONG || c == TYPE_LONG_UPPER)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Tag> {
        Parser::new(input).parse()
    }

    #[test]
    fn test_classify_booleans() {
        assert_eq!(classify_literal("true"), Tag::Byte(1));
        assert_eq!(classify_literal("false"), Tag::Byte(0));
        assert_eq!(classify_literal("True"), Tag::from("True"));
    }

    #[test]
    fn test_classify_unsuffixed_numbers() {
        assert_eq!(classify_literal("5"), Tag::Int(5));
        assert_eq!(classify_literal("-17"), Tag::Int(-17));
        assert_eq!(classify_literal("5.0"), Tag::Double(5.0));
        assert_eq!(classify_literal("3000000000"), Tag::Double(3_000_000_000.0));
        assert_eq!(classify_literal("1e3"), Tag::Double(1000.0));
        assert_eq!(classify_literal("v2"), Tag::from("v2"));
    }

    #[test]
    fn test_classify_suffixes() {
        assert_eq!(classify_literal("5b"), Tag::Byte(5));
        assert_eq!(classify_literal("5B"), Tag::Byte(5));
        assert_eq!(classify_literal("-5s"), Tag::Short(-5));
        assert_eq!(classify_literal("5i"), Tag::Int(5));
        assert_eq!(classify_literal("5L"), Tag::Long(5));
        assert_eq!(classify_literal("5l"), Tag::Long(5));
        assert_eq!(classify_literal("5f"), Tag::Float(5.0));
        assert_eq!(classify_literal("1.5D"), Tag::Double(1.5));
    }

    #[test]
    fn test_classify_falls_back_to_string() {
        assert_eq!(classify_literal("128b"), Tag::from("128b"));
        assert_eq!(classify_literal("stone"), Tag::from("stone"));
        assert_eq!(classify_literal("b"), Tag::from("b"));
        assert_eq!(classify_literal("1.5b"), Tag::from("1.5b"));
        assert_eq!(classify_literal("minecraft.id"), Tag::from("minecraft.id"));
    }

    #[test]
    fn test_non_java_float_words_stay_strings() {
        assert_eq!(classify_literal("inff"), Tag::from("inff"));
        assert_eq!(classify_literal("nand"), Tag::from("nand"));
        assert!(matches!(classify_literal("NaNd"), Tag::Double(v) if v.is_nan()));
        assert_eq!(classify_literal("Infinityf"), Tag::Float(f32::INFINITY));
        assert_eq!(classify_literal("-Infinityd"), Tag::Double(f64::NEG_INFINITY));
        assert_eq!(classify_literal("NaNdd"), Tag::from("NaNdd"));
    }

    #[test]
    fn test_float_body_may_repeat_type_letter() {
        assert_eq!(classify_literal("5ff"), Tag::Float(5.0));
        assert_eq!(classify_literal("1.5dd"), Tag::Double(1.5));
        assert_eq!(classify_literal("5fd"), Tag::Double(5.0));
        assert_eq!(classify_literal("-2.5DF"), Tag::Float(-2.5));
        assert_eq!(classify_literal("5fff"), Tag::from("5fff"));
        assert_eq!(classify_literal("fd"), Tag::from("fd"));
        assert_eq!(classify_literal("-ff"), Tag::from("-ff"));
        assert_eq!(classify_literal("0x1p3d"), Tag::from("0x1p3d"));
    }

    #[test]
    fn test_typed_array_elements() {
        assert_eq!(decode_byte_element("1b"), Some(1));
        assert_eq!(decode_byte_element("1"), None);
        assert_eq!(decode_byte_element("1L"), None);
        assert_eq!(decode_int_element("7"), Some(7));
        assert_eq!(decode_int_element("7I"), Some(7));
        assert_eq!(decode_int_element("7b"), None);
        assert_eq!(decode_long_element("-9L"), Some(-9));
        assert_eq!(decode_long_element("9"), None);
    }

    #[test]
    fn test_bracket_disambiguation() {
        assert_eq!(parse("[]").unwrap(), Tag::List(List::new()));
        assert_eq!(parse("[B;]").unwrap(), Tag::ByteArray(Box::new([])));
        assert_eq!(parse("[I;]").unwrap(), Tag::IntArray(Box::new([])));
        assert_eq!(parse("[L;]").unwrap(), Tag::LongArray(Box::new([])));

        let list = parse("[B, C]").unwrap();
        assert_eq!(list.as_list().unwrap().len(), 2);
        assert_eq!(list.as_list().unwrap().get(0), Some(&Tag::from("B")));
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(parse(r#""add a \" here""#).unwrap(), Tag::from("add a \" here"));
        assert_eq!(parse(r#"'it\'s'"#).unwrap(), Tag::from("it's"));
        assert_eq!(parse(r#"'say \"hi\"'"#).unwrap(), Tag::from(r#"say \"hi\""#));
        assert_eq!(parse(r#""a\nb""#).unwrap(), Tag::from(r"a\nb"));
    }

    #[test]
    fn test_duplicate_keys_overwrite_in_place() {
        let tag = parse("{a: 1, b: 2, a: 3}").unwrap();
        let compound = tag.as_compound().unwrap();
        let members: Vec<_> = compound.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(
            members,
            vec![("a".to_string(), Tag::Int(3)), ("b".to_string(), Tag::Int(2))]
        );
    }

    #[test]
    fn test_depth_is_balanced_across_siblings() {
        let options = SnbtOptions::new().with_max_depth(2);
        let input = "{a: {x: 1}, b: {y: 2}, c: [1, 2]}";
        assert!(Parser::with_options(input, &options).parse().is_ok());
        assert!(Parser::with_options("{a: {b: {}}}", &options).parse().is_err());
    }

    #[test]
    fn test_missing_colon() {
        let err = parse("{a 1}").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { found: '1', .. }));
    }

    #[test]
    fn test_unterminated_string_reports_opening_quote() {
        let err = parse("{name: \"abc").unwrap_err();
        assert!(matches!(err, Error::UnterminatedString { line: 1, col: 8, .. }));
    }

    #[test]
    fn test_bad_typed_array_element() {
        let err = parse("[B; 1b, 2]").unwrap_err();
        assert!(matches!(
            err,
            Error::NumberFormat { expected: TagKind::Byte, ref literal, .. } if literal == "2"
        ));
        let err = parse("[I; 1, x]").unwrap_err();
        assert!(matches!(err, Error::NumberFormat { expected: TagKind::Int, .. }));
        let err = parse("[L; 1L; 2L]").unwrap_err();
        assert!(matches!(err, Error::NumberFormat { ref literal, .. } if literal == ";"));
    }

    #[test]
    fn test_bad_typed_array_element_points_at_element_start() {
        match parse("[B; 1b, 2]").unwrap_err() {
            Error::NumberFormat { line, col, context, .. } => {
                assert_eq!((line, col), (1, 9));
                assert_eq!(context, "[B; 1b, ");
            }
            other => panic!("unexpected error {other:?}"),
        }
        match parse("[I;\n  1,\n  oops]").unwrap_err() {
            Error::NumberFormat { line, col, .. } => assert_eq!((line, col), (3, 3)),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

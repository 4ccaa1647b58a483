//! SNBT writing.
//!
//! This module provides the [`Writer`] that renders a [`Tag`] tree as SNBT
//! text.
//!
//! ## Overview
//!
//! - **Compact** output keeps everything on one line with `", "` separators
//! - **Pretty** output puts every compound member and list element on its own
//!   line, indented with one tab per nesting level
//! - Numbers carry their width suffix (`b`, `s`, `L`, `f`, `d`; ints have none)
//!   so the text parses back to the same kind
//! - String values are always double-quoted; member names are quoted only when
//!   they must be
//!
//! ## Usage
//!
//! Most users should use the crate-level functions:
//!
//! ```rust
//! use snbt::{compound, to_string, to_string_pretty, Tag};
//!
//! let tag = Tag::Compound(compound! { "id" => "minecraft:stone", "Count" => 3i8 });
//! assert_eq!(to_string(&tag), "{id: \"minecraft:stone\", Count: 3b}");
//! assert_eq!(
//!     to_string_pretty(&tag),
//!     "{\n\tid: \"minecraft:stone\",\n\tCount: 3b\n}"
//! );
//! ```
//!
//! ## Direct Writer Usage
//!
//! ```rust
//! use snbt::{SnbtOptions, Tag, Writer};
//!
//! let mut writer = Writer::new(&SnbtOptions::new());
//! writer.write_tag(&Tag::IntArray(vec![1, 2, 3].into_boxed_slice()));
//! assert_eq!(writer.into_inner(), "[I; 1, 2, 3]");
//! ```

use crate::tokens::{
    self, ARRAY_BEGIN, ARRAY_END, ARRAY_SIGNATURE_SEPARATOR, COMPOUND_BEGIN, COMPOUND_END,
    DOUBLE_QUOTE, ESCAPE_MARKER, INDENT, KEY_VALUE_SEPARATOR, LITERAL_INFINITY, LITERAL_NAN,
    NEWLINE, TYPE_BYTE, TYPE_BYTE_UPPER, TYPE_DOUBLE, TYPE_FLOAT, TYPE_INT_UPPER, TYPE_LONG_UPPER,
    TYPE_SHORT, VALUE_SEPARATOR,
};
use crate::{Compound, List, SnbtOptions, Style, Tag};
use std::fmt::Display;

/// The SNBT writer.
///
/// Accumulates text for one or more tags; [`Writer::into_inner`] hands the
/// buffer back.
pub struct Writer {
    output: String,
    style: Style,
    depth: usize,
}

impl Writer {
    pub fn new(options: &SnbtOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            style: options.style,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the SNBT text for `tag`.
    pub fn write_tag(&mut self, tag: &Tag) {
        match tag {
            Tag::Byte(v) => self.write_number(v, Some(TYPE_BYTE)),
            Tag::Short(v) => self.write_number(v, Some(TYPE_SHORT)),
            Tag::Int(v) => self.write_number(v, None),
            Tag::Long(v) => self.write_number(v, Some(TYPE_LONG_UPPER)),
            Tag::Float(v) => self.write_float(*v, v.is_nan(), v.is_infinite(), TYPE_FLOAT),
            Tag::Double(v) => self.write_float(*v, v.is_nan(), v.is_infinite(), TYPE_DOUBLE),
            Tag::String(s) => self.write_quoted(s),
            Tag::ByteArray(values) => {
                self.write_typed_array(TYPE_BYTE_UPPER, values, Some(TYPE_BYTE))
            }
            Tag::IntArray(values) => self.write_typed_array(TYPE_INT_UPPER, values, None),
            Tag::LongArray(values) => {
                self.write_typed_array(TYPE_LONG_UPPER, values, Some(TYPE_LONG_UPPER))
            }
            Tag::List(list) => self.write_list(list),
            Tag::Compound(compound) => self.write_compound(compound),
        }
    }

    fn write_number<T: Display>(&mut self, value: T, suffix: Option<char>) {
        self.output.push_str(&value.to_string());
        if let Some(suffix) = suffix {
            self.output.push(suffix);
        }
    }

    /// Non-finite values use the spellings the parser's float grammar accepts.
    fn write_float<T>(&mut self, value: T, is_nan: bool, is_infinite: bool, suffix: char)
    where
        T: Display + PartialOrd + Default,
    {
        if is_nan {
            self.output.push_str(LITERAL_NAN);
        } else if is_infinite {
            if value < T::default() {
                self.output.push('-');
            }
            self.output.push_str(LITERAL_INFINITY);
        } else {
            self.output.push_str(&value.to_string());
        }
        self.output.push(suffix);
    }

    fn write_quoted(&mut self, s: &str) {
        self.output.push(DOUBLE_QUOTE);
        for ch in s.chars() {
            if ch == DOUBLE_QUOTE {
                self.output.push(ESCAPE_MARKER);
            }
            self.output.push(ch);
        }
        self.output.push(DOUBLE_QUOTE);
    }

    fn write_name(&mut self, name: &str) {
        if tokens::needs_quotation(name) {
            self.write_quoted(name);
        } else {
            self.output.push_str(name);
        }
    }

    fn write_typed_array<T: Display>(&mut self, marker: char, values: &[T], suffix: Option<char>) {
        self.output.push(ARRAY_BEGIN);
        self.output.push(marker);
        self.output.push(ARRAY_SIGNATURE_SEPARATOR);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.output.push(VALUE_SEPARATOR);
            }
            self.output.push(' ');
            self.write_number(value, suffix);
        }
        self.output.push(ARRAY_END);
    }

    fn write_list(&mut self, list: &List) {
        self.write_composite(ARRAY_BEGIN, ARRAY_END, list.iter(), |w, tag| {
            w.write_tag(tag)
        });
    }

    fn write_compound(&mut self, compound: &Compound) {
        self.write_composite(COMPOUND_BEGIN, COMPOUND_END, compound.iter(), |w, (name, tag)| {
            w.write_name(name);
            w.output.push(KEY_VALUE_SEPARATOR);
            w.output.push(' ');
            w.write_tag(tag);
        });
    }

    /// Writes the brackets and separators around a list or compound body.
    /// `depth` is back at its entry value when this returns.
    fn write_composite<I, F>(&mut self, begin: char, end: char, items: I, mut write_item: F)
    where
        I: ExactSizeIterator,
        F: FnMut(&mut Self, I::Item),
    {
        self.output.push(begin);
        if items.len() == 0 {
            self.output.push(end);
            return;
        }

        self.depth += 1;
        for (i, item) in items.enumerate() {
            match self.style {
                Style::Compact => {
                    if i > 0 {
                        self.output.push(VALUE_SEPARATOR);
                        self.output.push(' ');
                    }
                }
                Style::Pretty => {
                    if i > 0 {
                        self.output.push(VALUE_SEPARATOR);
                    }
                    self.write_line_break();
                }
            }
            write_item(self, item);
        }
        self.depth -= 1;

        if self.style == Style::Pretty {
            self.write_line_break();
        }
        self.output.push(end);
    }

    fn write_line_break(&mut self) {
        self.output.push(NEWLINE);
        for _ in 0..self.depth {
            self.output.push(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound;

    fn compact(tag: &Tag) -> String {
        let mut writer = Writer::new(&SnbtOptions::compact());
        writer.write_tag(tag);
        writer.into_inner()
    }

    fn pretty(tag: &Tag) -> String {
        let mut writer = Writer::new(&SnbtOptions::pretty());
        writer.write_tag(tag);
        writer.into_inner()
    }

    #[test]
    fn test_number_suffixes() {
        assert_eq!(compact(&Tag::Byte(-3)), "-3b");
        assert_eq!(compact(&Tag::Short(300)), "300s");
        assert_eq!(compact(&Tag::Int(7)), "7");
        assert_eq!(compact(&Tag::Long(1 << 40)), "1099511627776L");
        assert_eq!(compact(&Tag::Float(1.5)), "1.5f");
        assert_eq!(compact(&Tag::Double(0.25)), "0.25d");
        assert_eq!(compact(&Tag::Double(1.0)), "1d");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(compact(&Tag::Float(f32::NAN)), "NaNf");
        assert_eq!(compact(&Tag::Float(f32::INFINITY)), "Infinityf");
        assert_eq!(compact(&Tag::Double(f64::NEG_INFINITY)), "-Infinityd");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(compact(&Tag::from("plain")), "\"plain\"");
        assert_eq!(compact(&Tag::from("add a \" here ")), r#""add a \" here ""#);
        assert_eq!(compact(&Tag::from("")), "\"\"");
        assert_eq!(compact(&Tag::from("it's")), "\"it's\"");
    }

    #[test]
    fn test_member_names() {
        let tag = Tag::Compound(compound! {
            "bare_name.1" => 1,
            "Name With Space" => 2,
            "" => 3,
            "say \"hi\"" => 4,
        });
        assert_eq!(
            compact(&tag),
            r#"{bare_name.1: 1, "Name With Space": 2, "": 3, "say \"hi\"": 4}"#
        );
    }

    #[test]
    fn test_typed_arrays() {
        assert_eq!(compact(&Tag::ByteArray(vec![1, 0, 3].into_boxed_slice())), "[B; 1b, 0b, 3b]");
        assert_eq!(compact(&Tag::IntArray(vec![-1].into_boxed_slice())), "[I; -1]");
        assert_eq!(compact(&Tag::LongArray(vec![1, 2].into_boxed_slice())), "[L; 1L, 2L]");
        assert_eq!(compact(&Tag::ByteArray(Box::new([]))), "[B;]");
        assert_eq!(pretty(&Tag::IntArray(vec![1, 2].into_boxed_slice())), "[I; 1, 2]");
    }

    #[test]
    fn test_empty_composites() {
        assert_eq!(compact(&Tag::Compound(Compound::new())), "{}");
        assert_eq!(pretty(&Tag::Compound(Compound::new())), "{}");
        assert_eq!(pretty(&Tag::List(List::new())), "[]");
    }

    #[test]
    fn test_pretty_nesting() {
        let mut list = List::new();
        list.push("a").unwrap();
        list.push("b").unwrap();
        let tag = Tag::Compound(compound! {
            "inner" => compound! { "x" => 1 },
            "items" => list,
            "empty" => Compound::new(),
        });
        let expected = "{\n\tinner: {\n\t\tx: 1\n\t},\n\titems: [\n\t\t\"a\",\n\t\t\"b\"\n\t],\n\tempty: {}\n}";
        assert_eq!(pretty(&tag), expected);
    }

    #[test]
    fn test_depth_returns_to_zero() {
        let tag = Tag::Compound(compound! {
            "a" => compound! { "b" => compound! { "c" => 1 } },
        });
        let mut writer = Writer::new(&SnbtOptions::pretty());
        writer.write_tag(&tag);
        assert_eq!(writer.depth, 0);
        writer.write_tag(&Tag::Int(1));
        assert!(writer.into_inner().ends_with("}1"));
    }
}

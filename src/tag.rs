//! The typed tag tree.
//!
//! This module provides the [`Tag`] enum, a closed tagged union over the twelve
//! NBT payload kinds, and [`TagKind`], its fieldless discriminant.
//!
//! ## Names
//!
//! A tag's name belongs to whatever owns it: inside a [`Compound`] the name is
//! the member key, inside a [`List`] elements are nameless, and a free-standing
//! named tag (such as the root handed to a binary codec) is a [`NamedTag`].
//!
//! ## Usage Patterns
//!
//! ### Creating Tags
//!
//! ```rust
//! use snbt::{Compound, Tag};
//!
//! let byte = Tag::from(5i8);
//! let flag = Tag::from(true);
//! let text = Tag::from("hello");
//! let ints = Tag::from(vec![1i32, 2, 3]);
//!
//! let mut root = Compound::new();
//! root.insert("text", text);
//! let root = Tag::Compound(root);
//! assert_eq!(root.kind().name(), "compound");
//! # let _ = (byte, flag, ints);
//! ```
//!
//! ### Parsing and Printing
//!
//! ```rust
//! use snbt::Tag;
//!
//! let tag: Tag = "{id: 5b, pos: [I; 1, 2, 3]}".parse().unwrap();
//! assert_eq!(tag.to_string(), "{id: 5b, pos: [I; 1, 2, 3]}");
//! ```

use crate::{Compound, List};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kind of a [`Tag`].
///
/// Variants are declared in binary type-id order; [`TagKind::id`] exposes the
/// id used by the binary NBT encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

impl TagKind {
    /// Returns the binary NBT type id of this kind (1 through 12).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::TagKind;
    ///
    /// assert_eq!(TagKind::Byte.id(), 1);
    /// assert_eq!(TagKind::Compound.id(), 10);
    /// assert_eq!(TagKind::LongArray.id(), 12);
    /// ```
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            TagKind::Byte => 1,
            TagKind::Short => 2,
            TagKind::Int => 3,
            TagKind::Long => 4,
            TagKind::Float => 5,
            TagKind::Double => 6,
            TagKind::ByteArray => 7,
            TagKind::String => 8,
            TagKind::List => 9,
            TagKind::Compound => 10,
            TagKind::IntArray => 11,
            TagKind::LongArray => 12,
        }
    }

    /// Looks a kind up by its binary type id.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<TagKind> {
        Some(match id {
            1 => TagKind::Byte,
            2 => TagKind::Short,
            3 => TagKind::Int,
            4 => TagKind::Long,
            5 => TagKind::Float,
            6 => TagKind::Double,
            7 => TagKind::ByteArray,
            8 => TagKind::String,
            9 => TagKind::List,
            10 => TagKind::Compound,
            11 => TagKind::IntArray,
            12 => TagKind::LongArray,
            _ => return None,
        })
    }

    /// Human-readable name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::Byte => "byte",
            TagKind::Short => "short",
            TagKind::Int => "int",
            TagKind::Long => "long",
            TagKind::Float => "float",
            TagKind::Double => "double",
            TagKind::ByteArray => "byte array",
            TagKind::String => "string",
            TagKind::List => "list",
            TagKind::Compound => "compound",
            TagKind::IntArray => "int array",
            TagKind::LongArray => "long array",
        }
    }

    /// Returns `true` for the two composite kinds.
    #[inline]
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, TagKind::List | TagKind::Compound)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single NBT value.
///
/// Array payloads are fixed-length boxed slices exclusively owned by the tag.
/// Composites own their children, so a tree is acyclic by construction.
///
/// # Examples
///
/// ```rust
/// use snbt::{Tag, TagKind};
///
/// let tag = Tag::Long(42);
/// assert_eq!(tag.kind(), TagKind::Long);
/// assert_eq!(tag.as_long(), Some(42));
/// assert_eq!(tag.as_int(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Box<[i8]>),
    IntArray(Box<[i32]>),
    LongArray(Box<[i64]>),
    List(List),
    Compound(Compound),
}

impl Tag {
    /// Returns the kind of this tag.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::String(_) => TagKind::String,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
        }
    }

    /// Returns `true` if the tag is a compound.
    #[inline]
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Tag::Compound(_))
    }

    /// Returns `true` if the tag is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Tag::List(_))
    }

    /// Returns `true` if the tag holds a single number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Tag::Byte(_) | Tag::Short(_) | Tag::Int(_) | Tag::Long(_) | Tag::Float(_) | Tag::Double(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    /// A byte read as a boolean: zero is `false`, anything else `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Tag;
    ///
    /// assert_eq!(Tag::Byte(1).as_bool(), Some(true));
    /// assert_eq!(Tag::Byte(0).as_bool(), Some(false));
    /// assert_eq!(Tag::Int(1).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_byte().map(|v| v != 0)
    }

    #[inline]
    #[must_use]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Tag::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

/// Compact SNBT text.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl FromStr for Tag {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        crate::from_str(s)
    }
}

/// A tag together with its name.
///
/// # Examples
///
/// ```rust
/// use snbt::{Compound, NamedTag};
///
/// let mut level = Compound::new();
/// level.put(NamedTag::new("LevelName", "world"));
/// assert_eq!(level.get("LevelName").and_then(|t| t.as_str()), Some("world"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTag {
    pub name: String,
    pub tag: Tag,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, tag: impl Into<Tag>) -> Self {
        NamedTag {
            name: name.into(),
            tag: tag.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> TagKind {
        self.tag.kind()
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Tag) {
        (self.name, self.tag)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Tag::Byte(v) => serializer.serialize_i8(*v),
            Tag::Short(v) => serializer.serialize_i16(*v),
            Tag::Int(v) => serializer.serialize_i32(*v),
            Tag::Long(v) => serializer.serialize_i64(*v),
            Tag::Float(v) => serializer.serialize_f32(*v),
            Tag::Double(v) => serializer.serialize_f64(*v),
            Tag::String(s) => serializer.serialize_str(s),
            Tag::ByteArray(values) => serializer.collect_seq(values.iter()),
            Tag::IntArray(values) => serializer.collect_seq(values.iter()),
            Tag::LongArray(values) => serializer.collect_seq(values.iter()),
            Tag::List(list) => list.serialize(serializer),
            Tag::Compound(compound) => compound.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value representable as an NBT tag")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(match i32::try_from(value) {
                    Ok(v) => Tag::Int(v),
                    Err(_) => Tag::Long(value),
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if let Ok(v) = i32::try_from(value) {
                    Ok(Tag::Int(v))
                } else if let Ok(v) = i64::try_from(value) {
                    Ok(Tag::Long(v))
                } else {
                    Ok(Tag::Double(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Tag::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Tag::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Tag::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = List::new();
                while let Some(elem) = seq.next_element::<Tag>()? {
                    list.push(elem).map_err(de::Error::custom)?;
                }
                Ok(Tag::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut compound = Compound::new();
                while let Some((key, value)) = map.next_entry::<String, Tag>()? {
                    compound.insert(key, value);
                }
                Ok(Tag::Compound(compound))
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids_roundtrip() {
        for id in 1..=12u8 {
            let kind = TagKind::from_id(id).unwrap();
            assert_eq!(kind.id(), id);
        }
        assert_eq!(TagKind::from_id(0), None);
        assert_eq!(TagKind::from_id(13), None);
    }

    #[test]
    fn test_kind_of_every_variant() {
        assert_eq!(Tag::Byte(1).kind(), TagKind::Byte);
        assert_eq!(Tag::Short(1).kind(), TagKind::Short);
        assert_eq!(Tag::Float(1.0).kind(), TagKind::Float);
        assert_eq!(Tag::ByteArray(Box::new([])).kind(), TagKind::ByteArray);
        assert_eq!(Tag::List(List::new()).kind(), TagKind::List);
        assert!(TagKind::Compound.is_composite());
        assert!(!TagKind::IntArray.is_composite());
    }

    #[test]
    fn test_accessors() {
        let tag = Tag::IntArray(vec![1, 2, 3].into_boxed_slice());
        assert_eq!(tag.as_int_array(), Some(&[1, 2, 3][..]));
        assert_eq!(tag.as_long_array(), None);
        assert!(!tag.is_number());
        assert!(Tag::Double(0.5).is_number());
    }

    #[test]
    fn test_mutable_compound_access() {
        let mut tag = Tag::Compound(Compound::new());
        tag.as_compound_mut().unwrap().insert("x", 3);
        assert_eq!(tag.as_compound().unwrap().get("x"), Some(&Tag::Int(3)));
        assert!(tag.as_list_mut().is_none());
    }

    #[test]
    fn test_display_and_from_str() {
        let tag: Tag = "{a: 1b}".parse().unwrap();
        assert_eq!(tag.to_string(), "{a: 1b}");
    }

    #[test]
    fn test_named_tag() {
        let named = NamedTag::new("Health", 20.0f32);
        assert_eq!(named.name(), "Health");
        assert_eq!(named.kind(), TagKind::Float);
        let (name, tag) = named.into_parts();
        assert_eq!(name, "Health");
        assert_eq!(tag, Tag::Float(20.0));
    }
}

//! Conversions between native Rust values and [`Tag`]s.
//!
//! Every payload type converts into its tag with [`From`], and back out with
//! [`TryFrom`], which fails with [`Error::TypeMismatch`] when the tag is of a
//! different kind. `bool` is stored as a byte (`1`/`0`); any non-zero byte
//! reads back as `true`.
//!
//! ```rust
//! use snbt::{Error, Tag, TagKind};
//!
//! let tag = Tag::from(vec![1i64, 2, 3]);
//! assert_eq!(tag.kind(), TagKind::LongArray);
//! assert_eq!(Vec::<i64>::try_from(tag).unwrap(), vec![1, 2, 3]);
//!
//! let err = i32::try_from(Tag::from("x")).unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::TypeMismatch { expected: TagKind::Int, found: TagKind::String }
//! );
//! ```

use crate::{Compound, Error, List, Result, Tag, TagKind};

macro_rules! impl_tag_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(value: $ty) -> Self {
                    Tag::$variant(value)
                }
            }

            impl TryFrom<Tag> for $ty {
                type Error = Error;

                fn try_from(tag: Tag) -> Result<Self> {
                    match tag {
                        Tag::$variant(value) => Ok(value),
                        other => Err(mismatch(TagKind::$variant, &other)),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_array_conversions {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for Tag {
                fn from(values: Vec<$elem>) -> Self {
                    Tag::$variant(values.into_boxed_slice())
                }
            }

            impl From<&[$elem]> for Tag {
                fn from(values: &[$elem]) -> Self {
                    Tag::$variant(values.into())
                }
            }

            impl TryFrom<Tag> for Vec<$elem> {
                type Error = Error;

                fn try_from(tag: Tag) -> Result<Self> {
                    Box::<[$elem]>::try_from(tag).map(Vec::from)
                }
            }
        )*
    };
}

impl_tag_conversions! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Box<[i8]> => ByteArray,
    Box<[i32]> => IntArray,
    Box<[i64]> => LongArray,
    List => List,
    Compound => Compound,
}

impl_array_conversions! {
    i8 => ByteArray,
    i32 => IntArray,
    i64 => LongArray,
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Tag::Byte(i8::from(value))
    }
}

impl TryFrom<Tag> for bool {
    type Error = Error;

    fn try_from(tag: Tag) -> Result<Self> {
        i8::try_from(tag).map(|v| v != 0)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}

fn mismatch(expected: TagKind, found: &Tag) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

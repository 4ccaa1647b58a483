//! Homogeneous list tags.
//!
//! A [`List`] holds nameless tags that all share the kind of the first
//! element. The rule is enforced on every insertion: [`List::push`] rejects a
//! tag of a different kind with [`Error::ListKindMismatch`] and leaves the
//! list unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{Error, List, Tag, TagKind};
//!
//! let mut list = List::new();
//! list.push("a").unwrap();
//! list.push("b").unwrap();
//! assert_eq!(list.element_kind(), Some(TagKind::String));
//!
//! let err = list.push(1).unwrap_err();
//! assert!(matches!(err, Error::ListKindMismatch { .. }));
//! assert_eq!(list.len(), 2);
//! ```

use crate::{Error, Result, Tag, TagKind};
use serde::{Serialize, Serializer};

/// An ordered sequence of same-kind tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List(Vec<Tag>);

impl List {
    #[must_use]
    pub fn new() -> Self {
        List(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        List(Vec::with_capacity(capacity))
    }

    /// Kind shared by every element, or `None` while the list is empty.
    #[must_use]
    pub fn element_kind(&self) -> Option<TagKind> {
        self.0.first().map(Tag::kind)
    }

    /// Appends a tag, failing if its kind differs from the list's.
    pub fn push(&mut self, tag: impl Into<Tag>) -> Result<()> {
        let tag = tag.into();
        if let Some(expected) = self.element_kind() {
            if tag.kind() != expected {
                return Err(Error::ListKindMismatch {
                    expected,
                    found: tag.kind(),
                });
            }
        }
        self.0.push(tag);
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<Tag> {
        self.0.pop()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.0.get(index)
    }

    /// Mutable access to an element. Replacing it with a tag of another kind
    /// is the caller's responsibility to avoid.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.0.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tag] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }
}

/// Builds a list from tags, failing on the first element whose kind differs
/// from the first one.
impl TryFrom<Vec<Tag>> for List {
    type Error = Error;

    fn try_from(tags: Vec<Tag>) -> Result<Self> {
        if let Some(first) = tags.first() {
            let expected = first.kind();
            if let Some(other) = tags.iter().find(|t| t.kind() != expected) {
                return Err(Error::ListKindMismatch {
                    expected,
                    found: other.kind(),
                });
            }
        }
        Ok(List(tags))
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

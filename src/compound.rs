//! Ordered, unique-keyed compound tags.
//!
//! [`Compound`] wraps an [`IndexMap`] so members keep their insertion order,
//! which makes the textual output deterministic.
//!
//! ## Duplicate Keys
//!
//! Inserting a key that already exists overwrites the value **in place**: the
//! member keeps its original position and the old value is returned. The
//! parser follows the same rule for repeated member names.
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{Compound, Tag};
//!
//! let mut player = Compound::new();
//! player.insert("Name", "Steve");
//! player.insert("Health", 20.0f32);
//! player.insert("Name", "Alex");
//!
//! let keys: Vec<_> = player.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["Name", "Health"]);
//! assert_eq!(player.get("Name"), Some(&Tag::from("Alex")));
//! ```

use crate::{NamedTag, Tag};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An ordered map of member names to tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    /// Creates an empty `Compound`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Compound;
    ///
    /// let compound = Compound::new();
    /// assert!(compound.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Compound(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Compound(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member, overwriting in place if the name already exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::{Compound, Tag};
    ///
    /// let mut compound = Compound::new();
    /// assert!(compound.insert("key", 42).is_none());
    /// assert_eq!(compound.insert("key", 43), Some(Tag::Int(42)));
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.0.insert(name.into(), tag.into())
    }

    /// Inserts a named tag under its own name.
    pub fn put(&mut self, named: NamedTag) -> Option<Tag> {
        self.0.insert(named.name, named.tag)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.0.get_mut(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes a member, keeping the remaining members in order.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        self.0.shift_remove(name)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the member names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Tag> {
        self.0.keys()
    }

    /// Returns an iterator over the member tags, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Tag> {
        self.0.values()
    }

    /// Returns an iterator over the members, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tag> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Tag> {
        self.0.iter_mut()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = indexmap::map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<T: IntoIterator<Item = (String, Tag)>>(iter: T) -> Self {
        Compound(IndexMap::from_iter(iter))
    }
}

impl FromIterator<NamedTag> for Compound {
    fn from_iter<T: IntoIterator<Item = NamedTag>>(iter: T) -> Self {
        iter.into_iter().map(NamedTag::into_parts).collect()
    }
}

impl Extend<(String, Tag)> for Compound {
    fn extend<T: IntoIterator<Item = (String, Tag)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

//! Item value type: a named, taggable, stackable unit.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ItemError, ItemResult};

/// A named, taggable, stackable unit held by an inventory slot.
///
/// The name is the item's stacking identity: two items match for container
/// purposes iff their names are equal, whatever their tags say. The reserved
/// `"count"` tag is a dedicated field rather than a map entry, so it exists on
/// every item and can never be removed. Derived `PartialEq` is structural
/// (name, count, and full tag set); use [`Item::matches`] for the name-only
/// comparison stacking decisions are made with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    count: u32,
    tags: HashMap<String, u32>,
}

impl Item {
    /// Reserved tag key for the stack count. Every item carries this tag.
    pub const COUNT: &'static str = "count";

    /// Name of the empty item, the value an unoccupied slot holds.
    pub const EMPTY_NAME: &'static str = "";

    /// Creates a named item with count 1.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_count(name, 1)
    }

    /// Creates a named item with the given count.
    #[must_use]
    pub fn with_count(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
            tags: HashMap::new(),
        }
    }

    /// Creates an empty item.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_count(Self::EMPTY_NAME, 0)
    }

    /// Returns whether this is the empty item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name == Self::EMPTY_NAME
    }

    /// Returns the name, the item's stacking identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stack count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Returns whether `other` stacks with this item (same name).
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns whether the item carries `tag`. Always true for `"count"`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        tag == Self::COUNT || self.tags.contains_key(tag)
    }

    /// Inserts a tag, or overwrites the value of an existing one.
    ///
    /// Writing `"count"` overwrites the stack count.
    pub fn put_tag(&mut self, tag: impl Into<String>, value: u32) {
        let tag = tag.into();
        if tag == Self::COUNT {
            self.count = value;
        } else {
            self.tags.insert(tag, value);
        }
    }

    /// Removes a tag.
    ///
    /// # Errors
    ///
    /// [`ItemError::ReservedTag`] for `"count"`; [`ItemError::TagNotFound`]
    /// if the tag is absent.
    pub fn remove_tag(&mut self, tag: &str) -> ItemResult<()> {
        if tag == Self::COUNT {
            return Err(ItemError::ReservedTag);
        }
        self.tags
            .remove(tag)
            .map(|_| ())
            .ok_or_else(|| ItemError::TagNotFound(tag.to_owned()))
    }

    /// Returns the value of `tag`.
    ///
    /// # Errors
    ///
    /// [`ItemError::TagNotFound`] if the tag is absent.
    pub fn tag_value(&self, tag: &str) -> ItemResult<u32> {
        if tag == Self::COUNT {
            return Ok(self.count);
        }
        self.tags
            .get(tag)
            .copied()
            .ok_or_else(|| ItemError::TagNotFound(tag.to_owned()))
    }

    /// Read-only view of every tag pair, `"count"` included.
    pub fn tags(&self) -> impl Iterator<Item = (&str, u32)> {
        std::iter::once((Self::COUNT, self.count))
            .chain(self.tags.iter().map(|(tag, &value)| (tag.as_str(), value)))
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::empty()
    }
}

// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, editable tag lists.

use alloc::vec::Vec;

use tracing::debug;

use crate::error::{Result, TagError};
use crate::tag::Tag;

/// An ordered list of tags plus a revision counter.
///
/// Identity is position: there are no stable ids, so every edit that moves
/// or restyles an item bumps the revision. Views holding a copy of the list
/// compare revisions and reload when they differ.
///
/// ```
/// use surf_tags::{Tag, TagList};
///
/// let mut list = TagList::from_titles(["iOS", "Android", "PM"]);
/// assert_eq!(list.revision(), 0);
///
/// list.toggle(2).unwrap();
/// list.promote(2).unwrap();
/// assert_eq!(list.get(0), Some(&Tag::new("PM", true)));
/// assert_eq!(list.revision(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
    revision: u64,
}

impl TagList {
    /// Wraps an existing sequence of tags.
    #[must_use]
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags, revision: 0 }
    }

    /// Builds a list of unselected tags.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<alloc::string::String>,
    {
        Self::new(titles.into_iter().map(|t| Tag::new(t, false)).collect())
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the list has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The tags, in order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The tag at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    /// Iterates over the tags in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Counter bumped by every successful edit.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of selected tags.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.tags.iter().filter(|t| t.is_selected()).count()
    }

    /// Flips the tag at `index` and returns its new selection state.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.tags.len();
        let tag = self
            .tags
            .get_mut(index)
            .ok_or(TagError::IndexOutOfRange { index, len })?;
        let selected = tag.toggle();
        self.bump_revision();
        debug!(index, selected, "tag toggled");
        Ok(selected)
    }

    /// Removes the tag at `from` and reinserts it at `to`.
    ///
    /// Moving an item onto itself is a no-op and leaves the revision alone.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.tags.len();
        for index in [from, to] {
            if index >= len {
                return Err(TagError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let tag = self.tags.remove(from);
        self.tags.insert(to, tag);
        self.bump_revision();
        Ok(())
    }

    /// Moves the tag at `index` to the front.
    pub fn promote(&mut self, index: usize) -> Result<()> {
        self.move_item(index, 0)
    }

    /// Consumes the list, returning the tags.
    #[must_use]
    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = core::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

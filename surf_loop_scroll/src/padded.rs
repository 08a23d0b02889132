// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::index::LoopIndex;

/// The logical list with duplicated boundary items on both sides.
///
/// Rebuilt from scratch whenever the logical list or the padding changes; it
/// never outlives the list it was derived from.
#[derive(Clone, Debug)]
pub struct PaddedList<T> {
    items: Vec<T>,
    index: LoopIndex,
}

impl<T: Clone> PaddedList<T> {
    /// Builds the padded strip for `logical` using `index`.
    ///
    /// `index.len()` must equal `logical.len()`.
    #[must_use]
    pub fn build(logical: &[T], index: LoopIndex) -> Self {
        debug_assert_eq!(
            logical.len(),
            index.len(),
            "index mapping must match the logical list"
        );
        let items = (0..index.padded_len())
            .map(|padded| logical[index.to_logical(padded)].clone())
            .collect();
        Self { items, index }
    }
}

impl<T> PaddedList<T> {
    /// Number of items in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a padded strip holds at least one logical item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index mapping the strip was built with.
    #[must_use]
    pub fn index(&self) -> LoopIndex {
        self.index
    }

    /// Returns the logical index and item at a padded position.
    #[must_use]
    pub fn get(&self, padded: usize) -> Option<(usize, &T)> {
        self.items
            .get(padded)
            .map(|item| (self.index.to_logical(padded), item))
    }

    /// Items in strip order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

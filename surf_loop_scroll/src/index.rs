// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index mapping between the padded strip and the logical list.
//!
//! A strip of `len` logical items is rendered as `padding` duplicated items,
//! then the logical items, then `padding` more duplicates:
//!
//! ```text
//! padded:   0   1   2   3 | 4   5  ...  14 | 15  16  17  18
//! logical:  7   8   9  10 | 0   1  ...  10 |  0   1   2   3
//! ```
//!
//! (`len = 11`, `padding = 4`.) Leading duplicates walk backward from the end
//! of the logical list and trailing duplicates walk forward from its start,
//! both cyclically, so the padding still shows real items in order when
//! `padding > len`.

use crate::config::ItemMetrics;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Largest number of duplicated items a strip may carry on each side.
pub const MAX_PADDING: usize = 4096;

/// Number of duplicated items needed on each side of a strip.
///
/// Enough to fill one viewport: `ceil(viewport_extent / item_extent)`.
/// Non-positive or non-finite inputs produce zero padding; ratios too large
/// for `usize` saturate.
#[must_use]
pub fn padding_count(viewport_extent: f64, metrics: ItemMetrics) -> usize {
    let count = (viewport_extent / metrics.extent).ceil();
    if !(count.is_finite() && count > 0.0) {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Viewport-to-item ratios are small; the value was checked to be positive"
    )]
    {
        count as usize
    }
}

/// Index arithmetic for one padded strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoopIndex {
    len: usize,
    padding: usize,
}

impl LoopIndex {
    /// Creates the mapping for `len` logical items with `padding` duplicates per side.
    ///
    /// Returns `None` when `len` is zero, since there is nothing to loop over,
    /// or when the padded length does not fit in `usize`.
    #[must_use]
    pub fn new(len: usize, padding: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        padding.checked_mul(2)?.checked_add(len)?;
        Some(Self { len, padding })
    }

    /// Number of logical items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a mapping cannot be built for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of duplicated items on each side.
    #[must_use]
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Number of items in the padded strip.
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.len + 2 * self.padding
    }

    /// Padded position of a logical index.
    #[must_use]
    pub fn to_padded(&self, logical: usize) -> usize {
        logical + self.padding
    }

    /// Logical index shown at a padded position.
    ///
    /// Total over every `usize`; positions past the padded strip continue the
    /// cycle.
    #[must_use]
    pub fn to_logical(&self, padded: usize) -> usize {
        if padded < self.padding {
            let back = self.padding - padded;
            (self.len - back % self.len) % self.len
        } else {
            (padded - self.padding) % self.len
        }
    }

    /// Returns `true` if `padded` is a duplicate rather than the real item.
    #[must_use]
    pub fn is_padding(&self, padded: usize) -> bool {
        padded < self.padding || padded >= self.padding + self.len
    }
}

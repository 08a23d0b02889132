// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip configuration: scroll axis and item sizing policy.

use crate::error::{LoopScrollError, Result};

/// Spacing used when items are sized by [`LayoutKind::ItemsPerViewport`].
pub const DEFAULT_SPACING: f64 = 12.0;

/// Axis the strip scrolls along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items flow left to right; extents are widths.
    #[default]
    Horizontal,
    /// Items flow top to bottom; extents are heights.
    Vertical,
}

/// How the nominal item extent and spacing are chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutKind {
    /// Every item has the given extent, separated by `spacing`.
    Fixed {
        /// Item extent along the scroll axis.
        extent: f64,
        /// Gap between consecutive items.
        spacing: f64,
    },
    /// The viewport shows this many items; spacing is [`DEFAULT_SPACING`].
    ///
    /// Fractional counts leave a partially visible item at the trailing edge.
    ItemsPerViewport(f64),
}

impl LayoutKind {
    /// Resolves the nominal item metrics for a viewport extent.
    pub fn resolve(&self, viewport_extent: f64) -> Result<ItemMetrics> {
        if !(viewport_extent.is_finite() && viewport_extent > 0.0) {
            return Err(LoopScrollError::InvalidViewport(viewport_extent));
        }
        match *self {
            Self::Fixed { extent, spacing } => {
                if !(extent.is_finite() && extent > 0.0) {
                    return Err(LoopScrollError::InvalidItemExtent(extent));
                }
                if !(spacing.is_finite() && spacing >= 0.0) {
                    return Err(LoopScrollError::InvalidSpacing(spacing));
                }
                Ok(ItemMetrics { extent, spacing })
            }
            Self::ItemsPerViewport(count) => {
                if !(count.is_finite() && count > 0.0) {
                    return Err(LoopScrollError::InvalidItemsPerViewport(count));
                }
                Ok(ItemMetrics {
                    extent: viewport_extent / count,
                    spacing: DEFAULT_SPACING,
                })
            }
        }
    }
}

/// Scroll axis plus sizing policy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoopScrollConfig {
    /// Item sizing policy.
    pub layout: LayoutKind,
    /// Scroll axis.
    pub axis: Axis,
}

impl LoopScrollConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(layout: LayoutKind, axis: Axis) -> Self {
        Self { layout, axis }
    }
}

impl Default for LoopScrollConfig {
    /// Four and a half items per viewport, scrolling horizontally.
    fn default() -> Self {
        Self::new(LayoutKind::ItemsPerViewport(4.5), Axis::Horizontal)
    }
}

/// Nominal item extent and spacing along the scroll axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemMetrics {
    /// Nominal item extent.
    pub extent: f64,
    /// Gap between consecutive items.
    pub spacing: f64,
}

impl ItemMetrics {
    /// Distance from one item's start to the next item's start.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.extent + self.spacing
    }
}

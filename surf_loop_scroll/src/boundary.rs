// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset re-centering for looping strips.
//!
//! [`BoundaryZones`] decides when a scroll offset has drifted far enough into
//! the duplicated padding that it must be moved back to the equivalent
//! position over the real items:
//!
//! - Near the trailing edge (`offset >= content - boundary`), the view is
//!   showing trailing duplicates of the first logical items; it snaps to
//!   `boundary - spacing`, just before logical item `0`.
//! - At or before the leading edge (`offset <= 0`), the view is showing
//!   leading duplicates of the last logical items; it snaps forward by one
//!   full cycle, to `len * stride`.
//!
//! Both targets show the same items the viewport already displayed, so the
//! snap is not visible to the user.
//!
//! These rules assume every item has the nominal extent and the strip has no
//! section inset. [`LoopScrollEngine::snap_target`] applies the same zones to
//! the measured layout and shifts by whole measured cycles instead.
//!
//! [`LoopScrollEngine::snap_target`]: crate::LoopScrollEngine::snap_target
//!
//! ## Minimal example
//!
//! ```rust
//! use surf_loop_scroll::{BoundaryZones, ItemMetrics, LoopIndex};
//!
//! let metrics = ItemMetrics { extent: 100.0, spacing: 12.0 };
//! let zones = BoundaryZones::new(LoopIndex::new(11, 4).unwrap(), metrics);
//! let content = zones.nominal_content_extent();
//!
//! assert_eq!(zones.snap_target(600.0, content), None);
//! assert_eq!(zones.snap_target(0.0, content), Some(11.0 * 112.0));
//! assert_eq!(zones.snap_target(content - 100.0, content), Some(4.0 * 112.0 - 12.0));
//! ```

use crate::config::ItemMetrics;
use crate::index::LoopIndex;
use crate::scalar::from_usize;

/// Re-centering thresholds derived from an index mapping and nominal metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryZones {
    index: LoopIndex,
    metrics: ItemMetrics,
}

impl BoundaryZones {
    /// Creates the zones for a strip.
    #[must_use]
    pub fn new(index: LoopIndex, metrics: ItemMetrics) -> Self {
        Self { index, metrics }
    }

    /// Extent covered by one side's padding: `padding * (extent + spacing)`.
    #[must_use]
    pub fn boundary_extent(&self) -> f64 {
        from_usize(self.index.padding()) * self.metrics.stride()
    }

    /// Extent of one full cycle of logical items: `len * (extent + spacing)`.
    #[must_use]
    pub fn cycle_extent(&self) -> f64 {
        from_usize(self.index.len()) * self.metrics.stride()
    }

    /// Content extent of the padded strip when every item has the nominal extent.
    #[must_use]
    pub fn nominal_content_extent(&self) -> f64 {
        from_usize(self.index.padded_len()) * self.metrics.stride() - self.metrics.spacing
    }

    /// Returns the offset to jump to, or `None` if `offset` is outside both zones.
    #[must_use]
    pub fn snap_target(&self, offset: f64, content_extent: f64) -> Option<f64> {
        let boundary = self.boundary_extent();
        if offset >= content_extent - boundary {
            Some(boundary - self.metrics.spacing)
        } else if offset <= 0.0 {
            Some(self.cycle_extent())
        } else {
            None
        }
    }
}

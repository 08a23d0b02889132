// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet configuration and host viewport metrics.

use crate::error::{Result, SheetError};
use crate::state::SheetExtents;

/// Constant extents and timing for a sheet.
///
/// The `full` extent is not configured here because it depends on the host
/// viewport; see [`SheetMetrics`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Extent below which a released drag dismisses the sheet.
    pub dismiss_extent: f64,
    /// Extent of the `mini` rest state.
    pub mini_extent: f64,
    /// Extent of the `half` rest state.
    pub half_extent: f64,
    /// Duration of entry, settle, and dismiss tweens.
    pub animation_duration_ms: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dismiss_extent: 200.0,
            mini_extent: 305.0,
            half_extent: 465.0,
            animation_duration_ms: 300,
        }
    }
}

/// Viewport metrics supplied by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetMetrics {
    /// Height of the viewport the sheet lives in.
    pub viewport_height: f64,
    /// Space reserved at the top of the viewport (status bar and similar).
    pub top_inset: f64,
}

impl SheetMetrics {
    /// Creates metrics from a viewport height and a top inset.
    #[must_use]
    pub fn new(viewport_height: f64, top_inset: f64) -> Self {
        Self {
            viewport_height,
            top_inset,
        }
    }

    /// Extent of the `full` state: the viewport minus the top inset.
    #[must_use]
    pub fn full_extent(&self) -> f64 {
        self.viewport_height - self.top_inset
    }
}

impl SheetConfig {
    /// Resolves the rest extents for the given viewport metrics.
    ///
    /// Fails if the metrics are not finite or if the resulting extents are not
    /// strictly increasing (for example a viewport too short to fit `half`).
    pub fn extents(&self, metrics: SheetMetrics) -> Result<SheetExtents> {
        for (name, value) in [
            ("viewport_height", metrics.viewport_height),
            ("top_inset", metrics.top_inset),
        ] {
            if !value.is_finite() {
                return Err(SheetError::NonFinite { name, value });
            }
        }
        SheetExtents::new(
            self.dismiss_extent,
            self.mini_extent,
            self.half_extent,
            metrics.full_extent(),
        )
    }
}

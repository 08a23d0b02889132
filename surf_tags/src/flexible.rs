// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tag area that wraps while it fits and switches to fixed rows when it doesn't.
//!
//! [`FlexibleArea`] starts with a left-aligned wrapping layout. Its height is
//! capped at [`FlexibleArea::max_height`]; once the wrapped content would be
//! taller, the area switches to [`AreaMode::Rows`], where item `i` goes to row
//! `i % rows` and each row is packed left to right, producing a strip that
//! scrolls sideways instead of growing.
//!
//! ```rust
//! use kurbo::Size;
//! use surf_tags::{AreaMode, FlexibleArea, FlexibleAreaConfig, TagList};
//!
//! let area = FlexibleArea::new(FlexibleAreaConfig::default(), TagList::from_titles(["a"; 6]));
//! let chip = Size::new(80.0, 40.0);
//! let sizes = [chip; 6];
//!
//! // Wide enough for everything to wrap into two lines.
//! let (mode, _) = area.layout(&sizes, 300.0);
//! assert_eq!(mode, AreaMode::Wrapping);
//!
//! // Too narrow: wrapping would need three lines, so the rows take over.
//! let (mode, layout) = area.layout(&sizes, 200.0);
//! assert_eq!(mode, AreaMode::Rows);
//! assert_eq!(layout.content_size.height, area.max_height(40.0));
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace};

use crate::error::Result;
use crate::list::TagList;
use crate::scalar::from_usize;

/// Spacing and row count for a [`FlexibleArea`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexibleAreaConfig {
    /// Number of rows in [`AreaMode::Rows`]. Zero is treated as one.
    pub rows: usize,
    /// Gap between neighbouring chips on a line.
    pub item_spacing: f64,
    /// Gap between lines.
    pub line_spacing: f64,
    /// Space before the first chip of each line.
    pub leading_inset: f64,
}

impl Default for FlexibleAreaConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            item_spacing: 12.0,
            line_spacing: 12.0,
            leading_inset: 20.0,
        }
    }
}

/// Which layout a [`FlexibleArea`] is using.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AreaMode {
    /// Left-aligned lines that wrap at the area width. Not scrollable.
    Wrapping,
    /// A fixed number of rows that scroll horizontally.
    Rows,
}

/// Chip frames plus the size of the content they span.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaLayout {
    /// One frame per input size, in input order.
    pub frames: Vec<Rect>,
    /// Bounding size of the frames, including the leading inset.
    pub content_size: Size,
}

impl AreaLayout {
    fn from_frames(frames: Vec<Rect>) -> Self {
        let content_size = frames.iter().fold(Size::ZERO, |size, frame| {
            Size::new(size.width.max(frame.x1), size.height.max(frame.y1))
        });
        Self {
            frames,
            content_size,
        }
    }
}

/// A selectable tag area with an adaptive layout.
#[derive(Clone, Debug)]
pub struct FlexibleArea {
    config: FlexibleAreaConfig,
    tags: TagList,
}

impl FlexibleArea {
    /// Creates an area over `tags`.
    #[must_use]
    pub fn new(config: FlexibleAreaConfig, tags: TagList) -> Self {
        Self { config, tags }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> FlexibleAreaConfig {
        self.config
    }

    /// The tags, in display order.
    #[must_use]
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// Replaces the tags.
    pub fn set_tags(&mut self, tags: TagList) {
        self.tags = tags;
    }

    /// Toggles the tag at `index`, moving it to the front if it became selected.
    ///
    /// Returns the new selection state.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        let selected = self.tags.toggle(index)?;
        if selected {
            self.tags.promote(index)?;
            debug!(index, "selected tag promoted to front");
        }
        Ok(selected)
    }

    /// Tallest the area may grow, given the height of one chip.
    #[must_use]
    pub fn max_height(&self, chip_height: f64) -> f64 {
        let rows = self.rows();
        chip_height * from_usize(rows) + self.config.line_spacing * from_usize(rows - 1)
    }

    /// Whether wrapped content of `content_height` overflows the area.
    #[must_use]
    pub fn needs_row_layout(&self, content_height: f64, chip_height: f64) -> bool {
        content_height > self.max_height(chip_height)
    }

    /// Lays out chips left-aligned, wrapping to a new line at `width`.
    ///
    /// A chip wider than the whole line still gets a line of its own.
    #[must_use]
    pub fn left_aligned_frames(&self, sizes: &[Size], width: f64) -> AreaLayout {
        let FlexibleAreaConfig {
            item_spacing,
            line_spacing,
            leading_inset,
            ..
        } = self.config;
        let mut frames = Vec::with_capacity(sizes.len());
        let mut origin = Point::new(leading_inset, 0.0);
        let mut line_height: f64 = 0.0;
        let mut line_is_empty = true;
        for &size in sizes {
            if !line_is_empty && origin.x + size.width > width {
                origin = Point::new(leading_inset, origin.y + line_height + line_spacing);
                line_height = 0.0;
            }
            line_is_empty = false;
            frames.push(Rect::from_origin_size(origin, size));
            origin.x += size.width + item_spacing;
            line_height = line_height.max(size.height);
        }
        AreaLayout::from_frames(frames)
    }

    /// Lays out chips in fixed rows: item `i` goes to row `i % rows`.
    ///
    /// Each row is packed left to right in item order; rows are stacked with
    /// the line spacing between them, each as tall as its tallest chip.
    #[must_use]
    pub fn row_frames(&self, sizes: &[Size]) -> AreaLayout {
        let rows = self.rows();
        let mut row_heights = alloc::vec![0.0_f64; rows];
        for (i, size) in sizes.iter().enumerate() {
            row_heights[i % rows] = row_heights[i % rows].max(size.height);
        }
        let mut row_tops = Vec::with_capacity(rows);
        let mut top = 0.0;
        for height in &row_heights {
            row_tops.push(top);
            top += height + self.config.line_spacing;
        }

        let mut cursors = alloc::vec![self.config.leading_inset; rows];
        let frames = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let row = i % rows;
                let origin = Point::new(cursors[row], row_tops[row]);
                cursors[row] += size.width + self.config.item_spacing;
                Rect::from_origin_size(origin, size)
            })
            .collect();
        AreaLayout::from_frames(frames)
    }

    /// Picks the layout for `sizes` at `width`.
    ///
    /// The wrapping layout wins unless its height exceeds
    /// [`max_height`](Self::max_height) for the tallest chip.
    #[must_use]
    pub fn layout(&self, sizes: &[Size], width: f64) -> (AreaMode, AreaLayout) {
        let chip_height = sizes.iter().fold(0.0_f64, |h, s| h.max(s.height));
        let wrapped = self.left_aligned_frames(sizes, width);
        if self.needs_row_layout(wrapped.content_size.height, chip_height) {
            trace!(
                content_height = wrapped.content_size.height,
                "wrapped tags overflow; using rows"
            );
            (AreaMode::Rows, self.row_frames(sizes))
        } else {
            (AreaMode::Wrapping, wrapped)
        }
    }

    fn rows(&self) -> usize {
        self.config.rows.max(1)
    }
}

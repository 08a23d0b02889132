// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless hosts shared by the Surf demos.
//!
//! The demos stand in for a real view layer: they log what a renderer would
//! draw and estimate text sizes with a fixed advance per character.

use kurbo::Size;
use surf_loop_scroll::{Axis, LoopScrollHost};
use surf_sheet::{SheetFrame, SheetHost, SheetState};
use surf_tags::{ChipMetrics, ChipStyle, Tag};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Width of one character in the demos' pretend font.
pub const CHAR_ADVANCE: f64 = 8.0;

/// Line height of the demos' pretend font.
pub const LINE_HEIGHT: f64 = 16.0;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Estimated chip size for a title.
#[must_use]
pub fn chip_size(title: &str, metrics: &ChipMetrics) -> Size {
    let label = Size::new(title.chars().count() as f64 * CHAR_ADVANCE, LINE_HEIGHT);
    metrics.chip_size(label)
}

/// A sheet host that logs every frame and keeps the last one.
#[derive(Debug, Default)]
pub struct SheetLog {
    /// Most recent frame rendered.
    pub last: Option<SheetFrame>,
    /// Set once the dismiss tween finished.
    pub dismissed: bool,
}

impl SheetHost for SheetLog {
    fn render(&mut self, frame: SheetFrame) {
        info!(
            extent = frame.extent,
            offset = frame.offset,
            bar = frame.bar_offset,
            "sheet frame"
        );
        self.last = Some(frame);
    }

    fn state_changed(&mut self, from: SheetState, to: SheetState) {
        info!(?from, ?to, "sheet state");
    }

    fn dismissed(&mut self) {
        info!("sheet dismissed");
        self.dismissed = true;
    }
}

/// A chip as the strip would draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChipView {
    /// Title shown on the chip.
    pub title: String,
    /// Fill and title colors.
    pub style: ChipStyle,
}

/// A loop-strip host that sizes chips from their titles and logs selections.
#[derive(Debug, Default)]
pub struct ChipStrip {
    /// Chip padding and rounding.
    pub metrics: ChipMetrics,
    /// Logical indices tapped so far.
    pub selected: Vec<usize>,
}

impl LoopScrollHost<Tag> for ChipStrip {
    type View = ChipView;

    fn measure_item(&mut self, _logical: usize, item: &Tag) -> Option<f64> {
        Some(chip_size(item.title(), &self.metrics).width)
    }

    fn render_item(&mut self, _logical: usize, _padded: usize, item: &Tag) -> ChipView {
        ChipView {
            title: item.title().to_owned(),
            style: item.style(),
        }
    }

    fn item_selected(&mut self, logical: usize, item: &Tag) {
        info!(logical, title = item.title(), "chip tapped");
        self.selected.push(logical);
    }

    fn did_end_decelerating(&mut self) {
        info!("strip settled");
    }

    fn section_inset(&self, _axis: Axis) -> f64 {
        20.0
    }
}

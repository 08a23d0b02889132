// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The looping strip controller.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Insets;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::boundary::BoundaryZones;
use crate::config::{Axis, ItemMetrics, LoopScrollConfig};
use crate::error::{LoopScrollError, Result};
use crate::host::LoopScrollHost;
use crate::index::{LoopIndex, MAX_PADDING, padding_count};
use crate::padded::PaddedList;
use crate::scalar::from_usize;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Delay before a reconfigured strip is refreshed, leaving room for a pending layout pass.
pub const DEFERRED_REFRESH_MS: u64 = 10;

/// A scroll offset the host should apply to its scroll view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollJump {
    /// Target offset along the scroll axis.
    pub offset: f64,
    /// Whether the move should be animated. Jumps issued by the engine are
    /// never animated so that re-centering stays invisible.
    pub animated: bool,
}

impl ScrollJump {
    fn immediate(offset: f64) -> Self {
        Self {
            offset,
            animated: false,
        }
    }
}

/// An item intersecting the viewport, with the view the host produced for it.
#[derive(Clone, Debug, PartialEq)]
pub struct RealizedItem<V> {
    /// Position in the padded strip.
    pub padded: usize,
    /// Index in the logical list.
    pub logical: usize,
    /// Start of the item along the scroll axis, in content coordinates.
    pub offset: f64,
    /// Extent of the item along the scroll axis.
    pub extent: f64,
    /// View returned by [`LoopScrollHost::render_item`].
    pub view: V,
}

/// Presents a finite list as an endless strip.
///
/// The engine keeps the logical list, the padded strip derived from it, the
/// nominal item metrics, and the scroll offset it last observed or requested.
/// Every rebuild (construction, [`reload`](Self::reload), a viewport change,
/// or a reconfiguration) recomputes the padding and regenerates the padded
/// strip from scratch, so no index from a previous list survives it.
///
/// ```
/// use surf_loop_scroll::{LayoutKind, LoopScrollConfig, LoopScrollEngine, LoopScrollHost, Axis};
///
/// struct Chips;
///
/// impl LoopScrollHost<&'static str> for Chips {
///     type View = String;
///
///     fn measure_item(&mut self, _: usize, _: &&'static str) -> Option<f64> {
///         None
///     }
///
///     fn render_item(&mut self, _: usize, _: usize, item: &&'static str) -> String {
///         item.to_string()
///     }
///
///     fn item_selected(&mut self, _: usize, _: &&'static str) {}
/// }
///
/// let items: Vec<&'static str> = vec!["a", "b", "c", "d", "e", "f"];
/// let config = LoopScrollConfig::new(LayoutKind::ItemsPerViewport(4.0), Axis::Horizontal);
/// let mut engine = LoopScrollEngine::new(items, config, 400.0, &mut Chips).unwrap();
///
/// // Four duplicates lead the strip, so logical item 0 starts four strides in.
/// assert_eq!(engine.padding(), 4);
/// assert_eq!(engine.scroll_offset(), 4.0 * 112.0);
///
/// let visible: Vec<String> = engine.realize(&mut Chips).into_iter().map(|it| it.view).collect();
/// assert_eq!(visible, ["a", "b", "c", "d"]);
/// ```
#[derive(Clone, Debug)]
pub struct LoopScrollEngine<T> {
    config: LoopScrollConfig,
    viewport_extent: f64,
    metrics: ItemMetrics,
    logical: Vec<T>,
    padded: PaddedList<T>,
    measured: HashMap<usize, f64>,
    scroll_offset: f64,
    pending_refresh: SmallVec<[u64; 2]>,
    revision: u64,
}

impl<T: Clone> LoopScrollEngine<T> {
    /// Builds the strip and positions it at logical item `0`.
    ///
    /// Fails if `items` is empty, if the configuration cannot be resolved
    /// for `viewport_extent`, or if filling the viewport would take more than
    /// [`MAX_PADDING`] duplicates per side.
    pub fn new<H: LoopScrollHost<T>>(
        items: Vec<T>,
        config: LoopScrollConfig,
        viewport_extent: f64,
        host: &mut H,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(LoopScrollError::EmptyList);
        }
        let metrics = config.layout.resolve(viewport_extent)?;
        let index = strip_index(items.len(), viewport_extent, metrics)?;
        let padded = PaddedList::build(&items, index);
        let mut engine = Self {
            config,
            viewport_extent,
            metrics,
            logical: items,
            padded,
            measured: HashMap::new(),
            scroll_offset: 0.0,
            pending_refresh: SmallVec::new(),
            revision: 0,
        };
        debug!(
            len = index.len(),
            padding = index.padding(),
            extent = metrics.extent,
            "loop strip built"
        );
        engine.jump_to_logical(0, host);
        Ok(engine)
    }

    /// Replaces the logical list, rebuilds the strip, and jumps to logical item `0`.
    ///
    /// This is the explicit "list changed" notification: hosts that toggle or
    /// reorder items call it with the updated list. On error the engine keeps
    /// its previous list.
    pub fn reload<H: LoopScrollHost<T>>(&mut self, items: Vec<T>, host: &mut H) -> Result<ScrollJump> {
        let index = strip_index(items.len(), self.viewport_extent, self.metrics)?;
        self.logical = items;
        self.rebuild(index);
        Ok(self.jump_to_logical(0, host))
    }

    /// Like [`reload`](Self::reload), but keeps the item at the leading edge in place.
    ///
    /// Useful after a selection toggle, where jumping back to the start would
    /// be jarring. If the list shrank below that item, the last item is used.
    pub fn reload_in_place<H: LoopScrollHost<T>>(
        &mut self,
        items: Vec<T>,
        host: &mut H,
    ) -> Result<ScrollJump> {
        let index = strip_index(items.len(), self.viewport_extent, self.metrics)?;
        let offset = self.scroll_offset;
        let leading = self.padded_at_offset(offset, host);
        let leading_logical = self.index().to_logical(leading);
        let within = offset - self.offset_of(leading, host);

        self.logical = items;
        self.rebuild(index);

        let logical = leading_logical.min(index.len() - 1);
        let offset = self.offset_of(index.to_padded(logical), host) + within;
        self.scroll_offset = offset;
        trace!(logical, offset, "reloaded in place");
        Ok(ScrollJump::immediate(offset))
    }

    /// Re-measures the strip for a new viewport extent and jumps to logical item `0`.
    pub fn viewport_extent_changed<H: LoopScrollHost<T>>(
        &mut self,
        viewport_extent: f64,
        host: &mut H,
    ) -> Result<ScrollJump> {
        let metrics = self.config.layout.resolve(viewport_extent)?;
        let index = strip_index(self.logical.len(), viewport_extent, metrics)?;
        self.viewport_extent = viewport_extent;
        self.metrics = metrics;
        self.rebuild(index);
        Ok(self.jump_to_logical(0, host))
    }

    /// Applies a new configuration now and schedules a refresh.
    ///
    /// The strip is rebuilt immediately; the jump back to logical item `0` is
    /// deferred by [`DEFERRED_REFRESH_MS`] and delivered by [`tick`](Self::tick).
    /// Scheduled refreshes cannot be cancelled.
    pub fn update_configuration(&mut self, config: LoopScrollConfig, now_ms: u64) -> Result<()> {
        let metrics = config.layout.resolve(self.viewport_extent)?;
        let index = strip_index(self.logical.len(), self.viewport_extent, metrics)?;
        self.config = config;
        self.metrics = metrics;
        self.rebuild(index);
        let due = now_ms.saturating_add(DEFERRED_REFRESH_MS);
        self.pending_refresh.push(due);
        debug!(?config, due, "configuration updated; refresh scheduled");
        Ok(())
    }

    /// Delivers any scheduled refresh that is due.
    ///
    /// Returns the jump the host should apply, after which it should re-realize
    /// the strip. Several refreshes falling due together produce one jump.
    pub fn tick<H: LoopScrollHost<T>>(&mut self, now_ms: u64, host: &mut H) -> Option<ScrollJump> {
        let before = self.pending_refresh.len();
        self.pending_refresh.retain(|due| *due > now_ms);
        if self.pending_refresh.len() == before {
            return None;
        }
        trace!(now_ms, "deferred refresh fired");
        Some(self.jump_to_logical(0, host))
    }

    /// Whether a deferred refresh is still waiting to fire.
    #[must_use]
    pub fn has_pending_refresh(&self) -> bool {
        !self.pending_refresh.is_empty()
    }

    /// Records a scroll position reported by the host and re-centers if needed.
    ///
    /// Returns the jump to apply when `offset` has moved into either padding
    /// zone; see [`snap_target`](Self::snap_target).
    pub fn scroll_position_changed<H: LoopScrollHost<T>>(
        &mut self,
        offset: f64,
        content_extent: f64,
        host: &mut H,
    ) -> Option<ScrollJump> {
        self.scroll_offset = offset;
        let target = self.snap_target(offset, content_extent, host)?;
        debug!(from = offset, to = target, "re-centering loop strip");
        self.scroll_offset = target;
        Some(ScrollJump::immediate(target))
    }

    /// Offset that `offset` re-centers to, or `None` outside both padding zones.
    ///
    /// Zones and targets come from the layout `realize` uses: the host's
    /// section inset and measured item extents.
    ///
    /// The trailing zone starts where the trailing padding does, measured back
    /// from `content_extent`; the leading zone is `offset <= 0`. Either way the
    /// offset moves by whole cycles of logical items, so every visible item
    /// keeps its on-screen position. With nominal extents and no inset the
    /// targets at the zone edges are those of [`BoundaryZones::snap_target`].
    pub fn snap_target<H: LoopScrollHost<T>>(
        &mut self,
        offset: f64,
        content_extent: f64,
        host: &mut H,
    ) -> Option<f64> {
        if !offset.is_finite() {
            return None;
        }
        let index = self.index();
        let first = self.offset_of(index.to_padded(0), host);
        let trailing_start = self.offset_of(index.to_padded(index.len()), host);
        let cycle = trailing_start - first;
        let trailing_zone = self.content_extent(host) - (trailing_start - self.metrics.spacing);
        let threshold = content_extent - trailing_zone;

        if offset >= threshold {
            let cycles = ((offset - threshold) / cycle).floor() + 1.0;
            Some(offset - cycles * cycle)
        } else if offset <= 0.0 {
            let cycles = (-offset / cycle).floor() + 1.0;
            Some(offset + cycles * cycle)
        } else {
            None
        }
    }

    /// Jumps to a logical item, aligning its start with the viewport's leading edge.
    ///
    /// Indices past the end wrap around.
    pub fn scroll_to<H: LoopScrollHost<T>>(&mut self, logical: usize, host: &mut H) -> ScrollJump {
        let logical = logical % self.logical.len();
        self.jump_to_logical(logical, host)
    }

    /// Forwards a tap on the item at padded position `padded`.
    ///
    /// Returns the logical index reported to the host, or `None` if `padded`
    /// is outside the strip.
    pub fn select<H: LoopScrollHost<T>>(&mut self, padded: usize, host: &mut H) -> Option<usize> {
        if padded >= self.padded.len() {
            return None;
        }
        let logical = self.index().to_logical(padded);
        trace!(padded, logical, "item selected");
        host.item_selected(logical, &self.logical[logical]);
        Some(logical)
    }

    /// Forwards the end of a user drag.
    pub fn did_end_dragging<H: LoopScrollHost<T>>(&mut self, will_decelerate: bool, host: &mut H) {
        if !will_decelerate {
            host.did_end_decelerating();
        }
    }

    /// Forwards the end of deceleration.
    pub fn did_end_decelerating<H: LoopScrollHost<T>>(&mut self, host: &mut H) {
        host.did_end_decelerating();
    }

    /// Produces views for every item intersecting the viewport at the current offset.
    pub fn realize<H: LoopScrollHost<T>>(
        &mut self,
        host: &mut H,
    ) -> SmallVec<[RealizedItem<H::View>; 16]> {
        let start = self.scroll_offset;
        let end = start + self.viewport_extent;
        let index = self.index();
        let mut cursor = host.section_inset(self.config.axis);
        let mut realized = SmallVec::new();
        for padded in 0..self.padded.len() {
            if cursor >= end {
                break;
            }
            let extent = self.extent_of(padded, host);
            let item_end = cursor + extent;
            if item_end > start {
                let logical = index.to_logical(padded);
                let view = host.render_item(logical, padded, &self.padded.as_slice()[padded]);
                realized.push(RealizedItem {
                    padded,
                    logical,
                    offset: cursor,
                    extent,
                    view,
                });
            }
            cursor = item_end + self.metrics.spacing;
        }
        realized
    }

    /// Extent of the item at a padded position, measured by the host when it can.
    pub fn extent_of<H: LoopScrollHost<T>>(&mut self, padded: usize, host: &mut H) -> f64 {
        let logical = self.index().to_logical(padded);
        if let Some(&extent) = self.measured.get(&logical) {
            return extent;
        }
        let extent = host
            .measure_item(logical, &self.logical[logical])
            .filter(|extent| extent.is_finite() && *extent > 0.0)
            .unwrap_or(self.metrics.extent);
        self.measured.insert(logical, extent);
        extent
    }

    /// Start of the item at a padded position, in content coordinates.
    pub fn offset_of<H: LoopScrollHost<T>>(&mut self, padded: usize, host: &mut H) -> f64 {
        let mut offset = host.section_inset(self.config.axis);
        for before in 0..padded.min(self.padded.len()) {
            offset += self.extent_of(before, host) + self.metrics.spacing;
        }
        offset
    }

    /// Total content extent of the padded strip, including section insets.
    pub fn content_extent<H: LoopScrollHost<T>>(&mut self, host: &mut H) -> f64 {
        let inset = host.section_inset(self.config.axis);
        let len = self.padded.len();
        let items: f64 = (0..len).map(|padded| self.extent_of(padded, host)).sum();
        let gaps = from_usize(len.saturating_sub(1)) * self.metrics.spacing;
        2.0 * inset + items + gaps
    }

    /// Logical index of the item under the viewport's leading edge.
    pub fn leading_item<H: LoopScrollHost<T>>(&mut self, host: &mut H) -> usize {
        let padded = self.padded_at_offset(self.scroll_offset, host);
        self.index().to_logical(padded)
    }

    fn padded_at_offset<H: LoopScrollHost<T>>(&mut self, offset: f64, host: &mut H) -> usize {
        let mut cursor = host.section_inset(self.config.axis);
        let last = self.padded.len() - 1;
        for padded in 0..last {
            cursor += self.extent_of(padded, host);
            if offset < cursor {
                return padded;
            }
            cursor += self.metrics.spacing;
        }
        last
    }

    fn jump_to_logical<H: LoopScrollHost<T>>(&mut self, logical: usize, host: &mut H) -> ScrollJump {
        let padded = self.index().to_padded(logical);
        let offset = self.offset_of(padded, host);
        self.scroll_offset = offset;
        trace!(logical, padded, offset, "jump");
        ScrollJump::immediate(offset)
    }

    fn rebuild(&mut self, index: LoopIndex) {
        self.padded = PaddedList::build(&self.logical, index);
        self.measured.clear();
        self.revision += 1;
        debug!(
            len = index.len(),
            padding = index.padding(),
            revision = self.revision,
            "loop strip rebuilt"
        );
    }
}

impl<T> LoopScrollEngine<T> {
    /// Logical items, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.logical
    }

    /// Padded strip, in order.
    #[must_use]
    pub fn padded_items(&self) -> &[T] {
        self.padded.as_slice()
    }

    /// Current index mapping.
    #[must_use]
    pub fn index(&self) -> LoopIndex {
        self.padded.index()
    }

    /// Number of duplicated items on each side.
    #[must_use]
    pub fn padding(&self) -> usize {
        self.index().padding()
    }

    /// Padded position of a logical index.
    #[must_use]
    pub fn to_padded(&self, logical: usize) -> usize {
        self.index().to_padded(logical)
    }

    /// Logical index shown at a padded position.
    #[must_use]
    pub fn to_logical(&self, padded: usize) -> usize {
        self.index().to_logical(padded)
    }

    /// Re-centering thresholds for the current strip.
    #[must_use]
    pub fn zones(&self) -> BoundaryZones {
        BoundaryZones::new(self.index(), self.metrics)
    }

    /// Nominal item metrics.
    #[must_use]
    pub fn metrics(&self) -> ItemMetrics {
        self.metrics
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> LoopScrollConfig {
        self.config
    }

    /// Viewport extent along the scroll axis.
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Offset last observed from, or requested of, the host.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Counter bumped on every rebuild after construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Section insets for the host's layout, on the scroll axis only.
    #[must_use]
    pub fn section_insets<H: LoopScrollHost<T>>(&self, host: &H) -> Insets {
        let inset = host.section_inset(self.config.axis);
        match self.config.axis {
            Axis::Horizontal => Insets::new(inset, 0.0, inset, 0.0),
            Axis::Vertical => Insets::new(0.0, inset, 0.0, inset),
        }
    }
}

fn strip_index(len: usize, viewport_extent: f64, metrics: ItemMetrics) -> Result<LoopIndex> {
    if len == 0 {
        return Err(LoopScrollError::EmptyList);
    }
    let padding = padding_count(viewport_extent, metrics);
    if padding > MAX_PADDING {
        return Err(LoopScrollError::PaddingTooLarge(padding));
    }
    LoopIndex::new(len, padding).ok_or(LoopScrollError::PaddingTooLarge(padding))
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::*;
    use crate::config::LayoutKind;

    #[derive(Default)]
    struct TestHost {
        chip_widths: bool,
        inset: f64,
        measured: Vec<usize>,
        rendered: Vec<(usize, usize)>,
        selected: Vec<usize>,
        settled: usize,
    }

    impl LoopScrollHost<String> for TestHost {
        type View = String;

        fn measure_item(&mut self, logical: usize, item: &String) -> Option<f64> {
            self.measured.push(logical);
            self.chip_widths.then(|| 48.0 + 8.0 * item.len() as f64)
        }

        fn render_item(&mut self, logical: usize, padded: usize, item: &String) -> String {
            self.rendered.push((logical, padded));
            item.clone()
        }

        fn item_selected(&mut self, logical: usize, _: &String) {
            self.selected.push(logical);
        }

        fn did_end_decelerating(&mut self) {
            self.settled += 1;
        }

        fn section_inset(&self, _: Axis) -> f64 {
            self.inset
        }
    }

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    // Items intersecting the viewport at `offset`, as (logical, position on screen).
    fn on_screen(
        engine: &mut LoopScrollEngine<String>,
        host: &mut TestHost,
        offset: f64,
    ) -> Vec<(usize, f64)> {
        let end = offset + engine.viewport_extent();
        let mut items = Vec::new();
        for padded in 0..engine.padded_items().len() {
            let start = engine.offset_of(padded, host);
            let extent = engine.extent_of(padded, host);
            if start < end && start + extent > offset {
                items.push((engine.to_logical(padded), start - offset));
            }
        }
        items
    }

    // Snaps from `offset` and checks that nothing moves on screen.
    fn assert_snap_is_invisible(
        engine: &mut LoopScrollEngine<String>,
        host: &mut TestHost,
        offset: f64,
        expected_target: f64,
    ) {
        let content = engine.content_extent(host);
        let before = on_screen(engine, host, offset);
        let jump = engine.scroll_position_changed(offset, content, host).unwrap();
        assert_eq!(jump.offset, expected_target);
        assert_eq!(on_screen(engine, host, jump.offset), before);

        let realized = engine.realize(host);
        let shown: Vec<(usize, f64)> = realized
            .iter()
            .map(|it| (it.logical, it.offset - jump.offset))
            .collect();
        assert_eq!(shown, before);
    }

    fn per_viewport(count: f64) -> LoopScrollConfig {
        LoopScrollConfig::new(LayoutKind::ItemsPerViewport(count), Axis::Horizontal)
    }

    // 11 items, viewport 400, four per viewport.
    fn eleven(host: &mut TestHost) -> LoopScrollEngine<String> {
        LoopScrollEngine::new(tags(11), per_viewport(4.0), 400.0, host).unwrap()
    }

    #[test]
    fn construction_positions_logical_zero() {
        let mut host = TestHost::default();
        let engine = eleven(&mut host);
        assert_eq!(engine.metrics().extent, 100.0);
        assert_eq!(engine.padding(), 4);
        assert_eq!(engine.to_padded(0), 4);
        assert_eq!(engine.to_logical(0), 7);
        assert_eq!(engine.to_logical(18), 3);
        assert_eq!(engine.scroll_offset(), 448.0);
        assert_eq!(engine.padded_items().len(), 19);
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut host = TestHost::default();
        let err = LoopScrollEngine::new(Vec::new(), per_viewport(4.0), 400.0, &mut host).unwrap_err();
        assert_eq!(err, LoopScrollError::EmptyList);

        let mut engine = eleven(&mut host);
        assert_eq!(engine.reload(Vec::new(), &mut host), Err(LoopScrollError::EmptyList));
        assert_eq!(engine.items().len(), 11);
        assert_eq!(engine.revision(), 0);
    }

    #[test]
    fn padded_items_repeat_logical_items() {
        let mut host = TestHost::default();
        let engine = eleven(&mut host);
        for (padded, item) in engine.padded_items().iter().enumerate() {
            assert_eq!(item, &engine.items()[engine.to_logical(padded)]);
        }
    }

    #[test]
    fn realize_covers_the_viewport() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        let visible = engine.realize(&mut host);
        let logical: Vec<usize> = visible.iter().map(|it| it.logical).collect();
        assert_eq!(logical, [0, 1, 2, 3]);
        assert_eq!(visible[0].offset, 448.0);
        assert_eq!(visible[3].offset, 448.0 + 3.0 * 112.0);
        assert_eq!(host.rendered, [(0, 4), (1, 5), (2, 6), (3, 7)]);

        // Half a stride in, the fifth item peeks in at the trailing edge.
        let content = engine.zones().nominal_content_extent();
        engine.scroll_position_changed(504.0, content, &mut host);
        let padded: Vec<usize> = engine.realize(&mut host).iter().map(|it| it.padded).collect();
        assert_eq!(padded, [4, 5, 6, 7, 8]);
    }

    #[test]
    fn scrolling_into_padding_recenters() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        let content = engine.content_extent(&mut host);
        assert_eq!(content, 19.0 * 112.0 - 12.0);

        assert_eq!(engine.scroll_position_changed(700.0, content, &mut host), None);
        assert_eq!(engine.scroll_offset(), 700.0);

        let jump = engine.scroll_position_changed(0.0, content, &mut host).unwrap();
        assert_eq!(jump, ScrollJump { offset: 1232.0, animated: false });
        assert_eq!(engine.scroll_offset(), 1232.0);

        // At the trailing threshold the target is just before logical item 0;
        // further in, it keeps the same distance past that point.
        let threshold = content - engine.zones().boundary_extent();
        let jump = engine.scroll_position_changed(threshold, content, &mut host).unwrap();
        assert_eq!(jump.offset, 436.0);
        let jump = engine.scroll_position_changed(content - 400.0, content, &mut host).unwrap();
        assert_eq!(jump.offset, 484.0);
        assert_eq!(engine.scroll_position_changed(threshold - 0.5, content, &mut host), None);
        assert_eq!(engine.scroll_position_changed(f64::NAN, content, &mut host), None);
    }

    #[test]
    fn recentering_preserves_visible_items() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        let content = engine.content_extent(&mut host);

        engine.scroll_position_changed(1.0, content, &mut host);
        let before: Vec<String> = engine.realize(&mut host).into_iter().map(|it| it.view).collect();
        engine.scroll_position_changed(0.0, content, &mut host);
        let after: Vec<String> = engine.realize(&mut host).into_iter().map(|it| it.view).collect();
        // Snapping out of the leading zone lands on the same logical item.
        assert_eq!(before[0], after[0]);
        assert_eq!(after[0], "7");
    }

    #[test]
    fn recentering_with_inset_keeps_items_in_place() {
        let mut host = TestHost {
            inset: 20.0,
            ..TestHost::default()
        };
        let mut engine = eleven(&mut host);
        let content = engine.content_extent(&mut host);
        assert_eq!(content, 40.0 + 19.0 * 112.0 - 12.0);

        // The trailing padding starts at 20 + 15 * 112; the zone opens one gap earlier.
        let threshold = 20.0 + 15.0 * 112.0 - 12.0;
        assert_eq!(engine.scroll_position_changed(threshold - 0.25, content, &mut host), None);
        assert_snap_is_invisible(&mut engine, &mut host, threshold, threshold - 1232.0);
        assert_snap_is_invisible(&mut engine, &mut host, 1700.25, 468.25);
    }

    #[test]
    fn recentering_with_measured_extents_keeps_items_in_place() {
        let mut host = TestHost {
            chip_widths: true,
            ..TestHost::default()
        };
        // Nominal extent 50 gives padding 8; chips "0".."9" are 56 wide and "10" is 64.
        let mut engine =
            LoopScrollEngine::new(tags(11), per_viewport(8.0), 400.0, &mut host).unwrap();
        assert_eq!(engine.padding(), 8);
        // Leading padding shows logical 3..=10.
        assert_eq!(engine.scroll_offset(), 7.0 * 56.0 + 64.0 + 8.0 * 12.0);
        let content = engine.content_extent(&mut host);
        assert_eq!(content, 1840.0);

        // One cycle is 10 * 56 + 64 + 11 * 12 = 756; the trailing zone opens at 1296.
        assert_eq!(engine.scroll_position_changed(1295.5, content, &mut host), None);
        assert_snap_is_invisible(&mut engine, &mut host, 1296.0, 540.0);
        assert_snap_is_invisible(&mut engine, &mut host, 1300.5, 544.5);
        assert_snap_is_invisible(&mut engine, &mut host, 0.0, 756.0);
    }

    #[test]
    fn overscroll_past_a_whole_cycle_lands_inside_the_strip() {
        let mut host = TestHost::default();
        let config = LoopScrollConfig::new(
            LayoutKind::Fixed {
                extent: 60.0,
                spacing: 0.0,
            },
            Axis::Horizontal,
        );
        // Three items cycle every 180, less than the 400 wide viewport.
        let mut engine = LoopScrollEngine::new(tags(3), config, 400.0, &mut host).unwrap();
        let content = engine.content_extent(&mut host);
        let jump = engine.scroll_position_changed(-200.0, content, &mut host).unwrap();
        assert_eq!(jump.offset, 160.0);
    }

    #[test]
    fn tiny_items_are_rejected_instead_of_overflowing() {
        let mut host = TestHost::default();
        let tiny = LoopScrollConfig::new(
            LayoutKind::Fixed {
                extent: 1e-300,
                spacing: 0.0,
            },
            Axis::Horizontal,
        );
        let err = LoopScrollEngine::new(tags(11), tiny, 400.0, &mut host).unwrap_err();
        assert_eq!(err, LoopScrollError::PaddingTooLarge(usize::MAX));

        // Finite but unreasonable paddings are refused too, and leave the engine as it was.
        let mut engine = eleven(&mut host);
        let narrow = LoopScrollConfig::new(
            LayoutKind::Fixed {
                extent: 0.0625,
                spacing: 0.0,
            },
            Axis::Horizontal,
        );
        assert_eq!(
            engine.update_configuration(narrow, 0),
            Err(LoopScrollError::PaddingTooLarge(6400))
        );
        assert_eq!(engine.padding(), 4);
        assert!(!engine.has_pending_refresh());

        let at_limit = LoopScrollConfig::new(
            LayoutKind::Fixed {
                extent: 400.0 / 4096.0,
                spacing: 0.0,
            },
            Axis::Horizontal,
        );
        engine.update_configuration(at_limit, 0).unwrap();
        assert_eq!(engine.padding(), MAX_PADDING);
    }

    #[test]
    fn reload_with_new_length_rebuilds_padding() {
        let mut host = TestHost::default();
        let config = LoopScrollConfig::new(
            LayoutKind::Fixed {
                extent: 50.0,
                spacing: 10.0,
            },
            Axis::Horizontal,
        );
        let mut engine = LoopScrollEngine::new(tags(11), config, 400.0, &mut host).unwrap();
        assert_eq!(engine.padding(), 8);

        let jump = engine.reload(tags(3), &mut host).unwrap();
        assert_eq!(engine.revision(), 1);
        assert_eq!(engine.padding(), 8);
        assert_eq!(engine.padded_items().len(), 3 + 16);
        assert_eq!(jump.offset, 8.0 * 60.0);
        for padded in 0..engine.padded_items().len() {
            let logical = engine.to_logical(padded);
            assert!(logical < 3);
            assert_eq!(engine.padded_items()[padded], engine.items()[logical]);
        }
    }

    #[test]
    fn measured_extents_drive_positions_and_are_cached() {
        let mut host = TestHost {
            chip_widths: true,
            ..TestHost::default()
        };
        let items = vec!["iOS".to_string(), "Android".to_string(), "PM".to_string()];
        let config = LoopScrollConfig::new(
            LayoutKind::Fixed {
                extent: 100.0,
                spacing: 12.0,
            },
            Axis::Horizontal,
        );
        let mut engine = LoopScrollEngine::new(items, config, 300.0, &mut host).unwrap();
        // Padding 3 is one full cycle: iOS 72, Android 104, PM 64.
        assert_eq!(engine.padding(), 3);
        assert_eq!(engine.scroll_offset(), 72.0 + 104.0 + 64.0 + 3.0 * 12.0);
        assert_eq!(engine.extent_of(1, &mut host), 104.0);

        let measured = host.measured.len();
        assert_eq!(measured, 3);
        engine.realize(&mut host);
        assert_eq!(host.measured.len(), measured);

        engine.reload(engine.items().to_vec(), &mut host).unwrap();
        assert_eq!(host.measured.len(), 2 * measured);
    }

    #[test]
    fn select_reports_logical_index() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        assert_eq!(engine.select(0, &mut host), Some(7));
        assert_eq!(engine.select(18, &mut host), Some(3));
        assert_eq!(engine.select(19, &mut host), None);
        assert_eq!(host.selected, [7, 3]);
    }

    #[test]
    fn reload_in_place_keeps_leading_item() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        engine.scroll_position_changed(702.0, 2116.0, &mut host);
        assert_eq!(engine.leading_item(&mut host), 2);

        let mut items = engine.items().to_vec();
        items[2].push('*');
        let jump = engine.reload_in_place(items, &mut host).unwrap();
        assert_eq!(jump.offset, 702.0);
        assert_eq!(engine.items()[2], "2*");
    }

    #[test]
    fn viewport_change_remeasures() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        let jump = engine.viewport_extent_changed(800.0, &mut host).unwrap();
        assert_eq!(engine.metrics().extent, 200.0);
        assert_eq!(engine.padding(), 4);
        assert_eq!(jump.offset, 4.0 * 212.0);
        assert!(engine.viewport_extent_changed(-1.0, &mut host).is_err());
        assert_eq!(engine.viewport_extent(), 800.0);
    }

    #[test]
    fn configuration_refresh_is_deferred() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        engine.scroll_position_changed(900.0, 2116.0, &mut host);

        engine
            .update_configuration(per_viewport(2.0), 1_000)
            .unwrap();
        assert_eq!(engine.metrics().extent, 200.0);
        assert_eq!(engine.padding(), 2);
        assert!(engine.has_pending_refresh());

        assert_eq!(engine.tick(1_005, &mut host), None);
        assert_eq!(engine.scroll_offset(), 900.0);

        let jump = engine.tick(1_010, &mut host).unwrap();
        assert_eq!(jump.offset, 2.0 * 212.0);
        assert!(!engine.has_pending_refresh());
        assert_eq!(engine.tick(2_000, &mut host), None);
    }

    #[test]
    fn scroll_to_wraps_and_insets_shift_positions() {
        let mut host = TestHost {
            inset: 20.0,
            ..TestHost::default()
        };
        let mut engine = eleven(&mut host);
        assert_eq!(engine.scroll_offset(), 20.0 + 448.0);
        let jump = engine.scroll_to(13, &mut host);
        assert_eq!(jump.offset, 20.0 + 6.0 * 112.0);
        assert_eq!(engine.section_insets(&host), Insets::new(20.0, 0.0, 20.0, 0.0));
    }

    #[test]
    fn drag_end_without_deceleration_reports_settled() {
        let mut host = TestHost::default();
        let mut engine = eleven(&mut host);
        engine.did_end_dragging(true, &mut host);
        assert_eq!(host.settled, 0);
        engine.did_end_dragging(false, &mut host);
        engine.did_end_decelerating(&mut host);
        assert_eq!(host.settled, 2);
    }
}

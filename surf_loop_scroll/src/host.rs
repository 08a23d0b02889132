// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::Axis;

/// Capabilities a host view layer provides to a [`LoopScrollEngine`](crate::LoopScrollEngine).
///
/// The engine never owns views. It asks the host to measure items whose extent
/// depends on their content, to produce a view for each realized item, and it
/// forwards selection and scroll-settling notifications.
///
/// Every callback receives the **logical** index of the item, so hosts never
/// see padding positions except as the `padded` argument of
/// [`render_item`](Self::render_item).
pub trait LoopScrollHost<T> {
    /// Handle to a realized item view.
    type View;

    /// Measures the extent of `item` along the scroll axis.
    ///
    /// Return `None` to use the layout's nominal item extent. Results are cached
    /// per logical index until the next rebuild.
    fn measure_item(&mut self, logical: usize, item: &T) -> Option<f64>;

    /// Produces a view for `item`, shown at padded position `padded`.
    fn render_item(&mut self, logical: usize, padded: usize, item: &T) -> Self::View;

    /// Called when the user selects an item.
    fn item_selected(&mut self, logical: usize, item: &T);

    /// Called when scrolling comes to rest.
    fn did_end_decelerating(&mut self) {}

    /// Inset before the first and after the last item along `axis`.
    fn section_inset(&self, axis: Axis) -> f64 {
        let _ = axis;
        0.0
    }
}

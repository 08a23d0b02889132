// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=surf_loop_scroll --heading-base-level=0

//! Surf Loop Scroll: endless strips over finite lists.
//!
//! A looping strip shows a finite list of items as if it repeated forever in
//! both directions. The trick is bookkeeping, not rendering: the strip is laid
//! out as `padding` duplicated items, then the real items, then `padding` more
//! duplicates, with `padding` chosen so that a whole viewport of duplicates
//! fits on each side. When the scroll offset wanders into either duplicate
//! zone it is moved, without animation, to the equivalent offset over the real
//! items. Because both positions show the same items, the user never sees the
//! jump.
//!
//! The pieces, bottom-up:
//!
//! - [`LoopScrollConfig`]: scroll [`Axis`] and a [`LayoutKind`] that resolves
//!   to nominal [`ItemMetrics`] for a viewport.
//! - [`padding_count`] and [`LoopIndex`]: how many duplicates to add and how
//!   padded positions map back to logical indices.
//! - [`PaddedList`]: the duplicated item sequence itself.
//! - [`BoundaryZones`]: the re-centering thresholds and targets for nominal
//!   extents.
//! - [`LoopScrollEngine`]: owns all of the above, talks to a
//!   [`LoopScrollHost`] for measuring, rendering, and selection, and reports
//!   the [`ScrollJump`]s the host must apply.
//!
//! ## Minimal example
//!
//! ```rust
//! use surf_loop_scroll::{LoopIndex, ItemMetrics, padding_count};
//!
//! let metrics = ItemMetrics { extent: 100.0, spacing: 12.0 };
//! let padding = padding_count(400.0, metrics);
//! let index = LoopIndex::new(11, padding).unwrap();
//!
//! assert_eq!(index.padded_len(), 19);
//! // The first padded slot shows the fourth-from-last item.
//! assert_eq!(index.to_logical(0), 7);
//! // The last padded slot continues from the start of the list.
//! assert_eq!(index.to_logical(18), 3);
//! ```
//!
//! Time enters only through [`LoopScrollEngine::update_configuration`] and
//! [`LoopScrollEngine::tick`], as host-supplied millisecond timestamps.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod boundary;
mod config;
mod engine;
mod error;
mod host;
mod index;
mod padded;
mod scalar;

pub use boundary::BoundaryZones;
pub use config::{Axis, DEFAULT_SPACING, ItemMetrics, LayoutKind, LoopScrollConfig};
pub use engine::{DEFERRED_REFRESH_MS, LoopScrollEngine, RealizedItem, ScrollJump};
pub use error::{LoopScrollError, Result};
pub use host::LoopScrollHost;
pub use index::{LoopIndex, MAX_PADDING, padding_count};
pub use padded::PaddedList;

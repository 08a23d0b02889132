// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=surf_tags --heading-base-level=0

//! Surf Tags: the selectable chips shown inside a sheet.
//!
//! This crate holds the item model that the sheet's sections display:
//!
//! - [`Tag`]: a title plus a `selected` flag, with a [`ChipStyle`] derived
//!   from that flag and [`ChipMetrics`] for turning a measured title into a
//!   chip size.
//! - [`TagList`]: the ordered logical list. Edits bump a revision counter,
//!   which is the explicit "list changed" signal views use to reload.
//! - [`TagSection`] and [`catalog`]: titled groups, each presented either as
//!   an endless strip ([`SectionKind::Loop`]) or as a [`FlexibleArea`]
//!   ([`SectionKind::Adaptive`]).
//!
//! Measuring text is left to the host; layout functions take chip sizes.
//!
//! ## Minimal example
//!
//! ```rust
//! use surf_tags::{ChipStyle, SectionKind, catalog};
//!
//! let mut sections = catalog();
//! let strip = sections
//!     .iter_mut()
//!     .find(|s| s.kind == SectionKind::Loop)
//!     .unwrap();
//!
//! let before = strip.tags.revision();
//! strip.tags.toggle(0).unwrap();
//! assert_ne!(strip.tags.revision(), before);
//! assert_eq!(strip.tags.get(0).unwrap().style(), ChipStyle::ACTIVE);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod flexible;
mod list;
mod scalar;
mod section;
mod tag;

pub use error::{Result, TagError};
pub use flexible::{AreaLayout, AreaMode, FlexibleArea, FlexibleAreaConfig};
pub use list::TagList;
pub use section::{SectionKind, TagSection, catalog};
pub use tag::{
    ACTIVE_DARK_GRAY, ChipMetrics, ChipStyle, INACTIVE_GRAY, TEXT_LIGHT_GRAY, Tag, hex_color,
};

// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=surf_sheet --heading-base-level=0

//! Surf Sheet: a drag-driven bottom sheet state machine.
//!
//! This crate models a panel anchored to the bottom of a viewport that the user
//! drags between four discrete states:
//!
//! - [`SheetState::Mini`]: compact, shown on first presentation.
//! - [`SheetState::Half`]: intermediate.
//! - [`SheetState::Full`]: the viewport height minus the top inset.
//! - [`SheetState::Dismiss`]: out of view, reached by dragging below the
//!   dismiss threshold.
//!
//! The core pieces are:
//!
//! - [`SheetExtents::next_state`]: the pure transition policy. Given the state the
//!   sheet rested in, the extent a drag reached, and the drag direction, it
//!   returns the state to settle into. It is total over its inputs.
//! - [`DragSession`]: the ephemeral state of one gesture.
//! - [`SheetController`]: owns the current state and the displayed
//!   [`SheetFrame`], consumes [`SheetGesture`]s, and tweens between rest frames
//!   on host-driven ticks.
//!
//! Like the rest of the workspace, the crate knows nothing about widgets or
//! rendering. Hosts translate their pan recognizer into [`SheetGesture`]s,
//! implement [`SheetHost`] to apply frames to concrete views, and call
//! [`SheetController::tick`] once per frame while a tween is in flight.
//!
//! ## Minimal example
//!
//! ```rust
//! use surf_sheet::{DragDirection, SheetConfig, SheetMetrics, SheetState};
//!
//! let extents = SheetConfig::default()
//!     .extents(SheetMetrics::new(844.0, 44.0))
//!     .unwrap();
//!
//! // Dragging down from mini by 150 lands below the dismiss threshold.
//! let live = extents.extent(SheetState::Mini) - 150.0;
//! let next = extents.next_state(SheetState::Mini, live, DragDirection::Down);
//! assert_eq!(next, SheetState::Dismiss);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod drag;
mod error;
mod state;
mod tween;

pub use config::{SheetConfig, SheetMetrics};
pub use controller::{SheetController, SheetFrame, SheetGesture, SheetHost, SheetPhase};
pub use drag::DragSession;
pub use error::{Result, SheetError};
pub use state::{DragDirection, SheetExtents, SheetState};

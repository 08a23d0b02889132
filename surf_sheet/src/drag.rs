// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the ephemeral state of one vertical sheet gesture.
//!
//! ## Usage
//!
//! 1) Open a session with [`DragSession::new`] when the gesture begins, recording the
//!    state the sheet was in and the extent it was displayed at.
//! 2) Feed the recognizer's cumulative translation with [`DragSession::set_translation`],
//!    or raw pointer positions with [`DragSession::update_pointer`].
//! 3) Read [`DragSession::live_extent`] and [`DragSession::direction`].
//! 4) Drop the session when the gesture ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use surf_sheet::{DragDirection, DragSession, SheetState};
//!
//! let mut session = DragSession::with_pointer(SheetState::Mini, 305.0, Point::new(40.0, 600.0));
//!
//! // Pointer moves 200 units up the screen.
//! let delta = session.update_pointer(Point::new(42.0, 400.0)).unwrap();
//! assert_eq!(delta.y, -200.0);
//! assert_eq!(session.live_extent(), 505.0);
//! assert_eq!(session.direction(), DragDirection::Up);
//! ```

use kurbo::{Point, Vec2};

use crate::state::{DragDirection, SheetState};

/// Tracks one drag gesture over the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_state: SheetState,
    origin_extent: f64,
    translation_y: f64,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragSession {
    /// Opens a session for a recognizer that reports cumulative translations.
    #[must_use]
    pub fn new(start_state: SheetState, origin_extent: f64) -> Self {
        Self {
            start_state,
            origin_extent,
            translation_y: 0.0,
            start_pos: None,
            last_pos: None,
        }
    }

    /// Opens a session for a host that reports raw pointer positions.
    #[must_use]
    pub fn with_pointer(start_state: SheetState, origin_extent: f64, pos: Point) -> Self {
        Self {
            start_pos: Some(pos),
            last_pos: Some(pos),
            ..Self::new(start_state, origin_extent)
        }
    }

    /// State the sheet was in when the gesture began.
    #[must_use]
    pub fn start_state(&self) -> SheetState {
        self.start_state
    }

    /// Extent the sheet was displayed at when the gesture began.
    #[must_use]
    pub fn origin_extent(&self) -> f64 {
        self.origin_extent
    }

    /// Cumulative vertical translation since the gesture began.
    #[must_use]
    pub fn translation_y(&self) -> f64 {
        self.translation_y
    }

    /// Records the recognizer's cumulative vertical translation.
    pub fn set_translation(&mut self, translation_y: f64) {
        self.translation_y = translation_y;
    }

    /// Records a new pointer position, returning the movement since the last one.
    ///
    /// The cumulative translation becomes the vertical distance from the start
    /// position. Returns `None` if the session was not opened with a pointer.
    pub fn update_pointer(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        self.translation_y = (pos - start).y;
        delta
    }

    /// Extent the drag has pulled the sheet to.
    ///
    /// Dragging upward (negative translation) grows the sheet.
    #[must_use]
    pub fn live_extent(&self) -> f64 {
        self.origin_extent - self.translation_y
    }

    /// Direction implied by the cumulative translation.
    #[must_use]
    pub fn direction(&self) -> DragDirection {
        DragDirection::from_translation(self.translation_y)
    }
}

// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet controller: gesture handling, rest-state transitions, and tweens.

use kurbo::Point;
use tracing::{debug, trace};

use crate::config::{SheetConfig, SheetMetrics};
use crate::drag::DragSession;
use crate::error::Result;
use crate::state::{DragDirection, SheetExtents, SheetState};
use crate::tween::Tween;

/// Geometry the host applies to its concrete views.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetFrame {
    /// Height of the panel.
    pub extent: f64,
    /// Distance the panel is pushed below the viewport's bottom edge.
    ///
    /// `0` while presented; the `mini` extent while hidden or dismissed.
    pub offset: f64,
    /// Downward offset of the submit bar below its resting position.
    pub bar_offset: f64,
}

/// Gesture phases reported by the host's pan recognizer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SheetGesture {
    /// The recognizer started tracking.
    Began,
    /// The pointer moved; `translation_y` is cumulative since `Began`.
    Changed {
        /// Cumulative vertical translation, positive downward.
        translation_y: f64,
    },
    /// The pointer lifted.
    Ended {
        /// Cumulative vertical translation, positive downward.
        translation_y: f64,
        /// Direction used by the transition policy. Hosts typically use
        /// [`DragDirection::from_translation`] or the release velocity sign.
        direction: DragDirection,
    },
    /// The recognizer was cancelled by the system.
    Cancelled,
}

/// Lifecycle phase of the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SheetPhase {
    /// Not yet presented; the panel sits below the viewport.
    #[default]
    Hidden,
    /// Entry tween from hidden to `mini`.
    Presenting,
    /// At rest at the current state's extent.
    Resting,
    /// Following a drag gesture.
    Dragging,
    /// Tweening to the current state's extent after a gesture.
    Settling,
    /// Tweening out of view after a dismissing gesture.
    Dismissing,
    /// Out of view; gestures are ignored until [`SheetController::present`].
    Dismissed,
}

/// Callbacks the controller invokes on its host.
pub trait SheetHost {
    /// Applies `frame` to the host's views.
    fn render(&mut self, frame: SheetFrame);

    /// Called when the discrete state changes.
    fn state_changed(&mut self, from: SheetState, to: SheetState) {
        let _ = (from, to);
    }

    /// Called once the dismiss tween has finished.
    fn dismissed(&mut self) {}
}

/// Drives a bottom sheet between its rest states in response to drags.
///
/// All time-dependent methods take a host-supplied monotonic timestamp in
/// milliseconds. Hosts call [`SheetController::tick`] every frame while
/// [`SheetController::is_animating`] is `true`.
///
/// ```
/// use surf_sheet::{
///     DragDirection, SheetConfig, SheetController, SheetFrame, SheetGesture, SheetHost,
///     SheetMetrics, SheetState,
/// };
///
/// #[derive(Default)]
/// struct Host(Vec<SheetFrame>);
///
/// impl SheetHost for Host {
///     fn render(&mut self, frame: SheetFrame) {
///         self.0.push(frame);
///     }
/// }
///
/// let mut host = Host::default();
/// let mut sheet =
///     SheetController::new(SheetConfig::default(), SheetMetrics::new(844.0, 44.0)).unwrap();
///
/// sheet.present(0, &mut host);
/// sheet.tick(300, &mut host);
/// assert_eq!(sheet.state(), SheetState::Mini);
///
/// // Drag 200 units up and release.
/// sheet.handle_gesture(SheetGesture::Began, 1_000, &mut host);
/// sheet.handle_gesture(SheetGesture::Changed { translation_y: -200.0 }, 1_016, &mut host);
/// sheet.handle_gesture(
///     SheetGesture::Ended { translation_y: -200.0, direction: DragDirection::Up },
///     1_032,
///     &mut host,
/// );
/// assert_eq!(sheet.state(), SheetState::Full);
///
/// sheet.tick(1_332, &mut host);
/// assert_eq!(host.0.last().unwrap().extent, 800.0);
/// ```
#[derive(Debug, Clone)]
pub struct SheetController {
    config: SheetConfig,
    metrics: SheetMetrics,
    extents: SheetExtents,
    state: SheetState,
    phase: SheetPhase,
    frame: SheetFrame,
    session: Option<DragSession>,
    tween: Option<Tween>,
    gestures_enabled: bool,
}

impl SheetController {
    /// Creates a hidden controller in the `mini` state.
    ///
    /// Fails if the configured extents and the viewport metrics do not
    /// produce `dismiss < mini < half < full`.
    pub fn new(config: SheetConfig, metrics: SheetMetrics) -> Result<Self> {
        let extents = config.extents(metrics)?;
        Ok(Self {
            config,
            metrics,
            extents,
            state: SheetState::Mini,
            phase: SheetPhase::Hidden,
            frame: hidden_frame(&extents),
            session: None,
            tween: None,
            gestures_enabled: false,
        })
    }

    /// Current discrete state.
    #[must_use]
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Most recently rendered frame.
    #[must_use]
    pub fn frame(&self) -> SheetFrame {
        self.frame
    }

    /// Resolved rest extents.
    #[must_use]
    pub fn extents(&self) -> &SheetExtents {
        &self.extents
    }

    /// Configuration the controller was created with.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Viewport metrics currently in effect.
    #[must_use]
    pub fn metrics(&self) -> SheetMetrics {
        self.metrics
    }

    /// Rest extent of `state` under the current metrics.
    #[must_use]
    pub fn target_extent(&self, state: SheetState) -> f64 {
        self.extents.extent(state)
    }

    /// State a gesture ending now at `live_extent` would settle into.
    #[must_use]
    pub fn next_state(&self, live_extent: f64, direction: DragDirection) -> SheetState {
        self.extents.next_state(self.state, live_extent, direction)
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether gesture input is currently accepted.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.gestures_enabled
    }

    /// Whether a tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Presents the sheet: resets to `mini` and tweens it up from below the viewport.
    ///
    /// Valid from any phase; a dismissed sheet becomes interactive again.
    pub fn present(&mut self, now_ms: u64, host: &mut impl SheetHost) {
        debug!(from = ?self.state, "presenting sheet");
        self.session = None;
        self.gestures_enabled = true;
        self.set_state(SheetState::Mini, host);
        self.frame = hidden_frame(&self.extents);
        host.render(self.frame);
        self.start_tween(rest_frame(&self.extents, SheetState::Mini), now_ms);
        self.phase = SheetPhase::Presenting;
    }

    /// Feeds one gesture phase into the controller.
    ///
    /// Input is ignored while the sheet is hidden or dismissed.
    pub fn handle_gesture(
        &mut self,
        gesture: SheetGesture,
        now_ms: u64,
        host: &mut impl SheetHost,
    ) {
        if !self.gestures_enabled {
            debug!(?gesture, phase = ?self.phase, "ignoring gesture");
            return;
        }
        match gesture {
            SheetGesture::Began => {
                self.begin_session(now_ms, None);
            }
            SheetGesture::Changed { translation_y } => {
                self.ensure_session(now_ms);
                if let Some(session) = self.session.as_mut() {
                    session.set_translation(translation_y);
                }
                self.apply_live_frame(host);
            }
            SheetGesture::Ended {
                translation_y,
                direction,
            } => {
                self.ensure_session(now_ms);
                if let Some(session) = self.session.as_mut() {
                    session.set_translation(translation_y);
                }
                self.finish_session(direction, now_ms, host);
            }
            SheetGesture::Cancelled => {
                self.session = None;
                debug!(state = ?self.state, "gesture cancelled");
                self.settle_to(self.state, now_ms, host);
            }
        }
    }

    /// Starts a drag from a raw pointer position.
    pub fn pointer_down(&mut self, pos: Point, now_ms: u64) {
        if !self.gestures_enabled {
            debug!(phase = ?self.phase, "ignoring pointer down");
            return;
        }
        self.begin_session(now_ms, Some(pos));
    }

    /// Moves the drag to a new raw pointer position.
    pub fn pointer_move(&mut self, pos: Point, host: &mut impl SheetHost) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(delta) = session.update_pointer(pos) {
            trace!(dy = delta.y, "pointer moved");
        }
        self.apply_live_frame(host);
    }

    /// Ends the drag at a raw pointer position, deriving direction from the translation.
    pub fn pointer_up(&mut self, pos: Point, now_ms: u64, host: &mut impl SheetHost) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.update_pointer(pos);
        let direction = session.direction();
        self.finish_session(direction, now_ms, host);
    }

    /// Advances any in-flight tween and renders the sampled frame.
    ///
    /// Returns `true` while a tween is still running.
    pub fn tick(&mut self, now_ms: u64, host: &mut impl SheetHost) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        self.frame = tween.sample(now_ms);
        host.render(self.frame);
        if !tween.is_done(now_ms) {
            return true;
        }
        self.tween = None;
        self.phase = match self.phase {
            SheetPhase::Dismissing => {
                debug!("sheet dismissed");
                host.dismissed();
                SheetPhase::Dismissed
            }
            _ => SheetPhase::Resting,
        };
        false
    }

    /// Applies new viewport metrics, which moves the `full` extent.
    ///
    /// On error the previous metrics stay in effect.
    pub fn set_metrics(&mut self, metrics: SheetMetrics, host: &mut impl SheetHost) -> Result<()> {
        self.extents = self.config.extents(metrics)?;
        self.metrics = metrics;
        if self.state != SheetState::Full {
            return Ok(());
        }
        let full = self.extents.extent(SheetState::Full);
        if let Some(tween) = self.tween.as_mut() {
            tween.retarget_extent(full);
        } else if self.phase == SheetPhase::Resting {
            self.frame.extent = full;
            host.render(self.frame);
        }
        Ok(())
    }

    fn begin_session(&mut self, now_ms: u64, pointer: Option<Point>) {
        if let Some(tween) = self.tween.take() {
            // Interrupted mid-tween: start from what is on screen.
            self.frame = tween.sample(now_ms);
            trace!(extent = self.frame.extent, "tween interrupted by drag");
        }
        let origin = self.frame.extent;
        self.session = Some(match pointer {
            Some(pos) => DragSession::with_pointer(self.state, origin, pos),
            None => DragSession::new(self.state, origin),
        });
        self.phase = SheetPhase::Dragging;
        trace!(state = ?self.state, origin, "drag began");
    }

    fn ensure_session(&mut self, now_ms: u64) {
        if self.session.is_none() {
            self.begin_session(now_ms, None);
        }
    }

    fn apply_live_frame(&mut self, host: &mut impl SheetHost) {
        let Some(session) = self.session else {
            return;
        };
        let live = session.live_extent();
        let full = self.extents.extent(SheetState::Full);
        let mini = self.extents.extent(SheetState::Mini);
        self.frame.extent = live.min(full);
        self.frame.bar_offset = (mini - live).max(0.0);
        trace!(live, bar_offset = self.frame.bar_offset, "drag changed");
        host.render(self.frame);
    }

    fn finish_session(&mut self, direction: DragDirection, now_ms: u64, host: &mut impl SheetHost) {
        let Some(session) = self.session.take() else {
            return;
        };
        let live = session.live_extent();
        let next = self.extents.next_state(self.state, live, direction);
        debug!(from = ?self.state, to = ?next, live, ?direction, "drag ended");
        if next == SheetState::Dismiss {
            self.begin_dismiss(now_ms, host);
        } else {
            self.settle_to(next, now_ms, host);
        }
    }

    fn settle_to(&mut self, next: SheetState, now_ms: u64, host: &mut impl SheetHost) {
        self.set_state(next, host);
        self.start_tween(rest_frame(&self.extents, next), now_ms);
        self.phase = SheetPhase::Settling;
    }

    fn begin_dismiss(&mut self, now_ms: u64, host: &mut impl SheetHost) {
        self.gestures_enabled = false;
        self.set_state(SheetState::Dismiss, host);
        let target = SheetFrame {
            extent: self.frame.extent,
            ..hidden_frame(&self.extents)
        };
        self.start_tween(target, now_ms);
        self.phase = SheetPhase::Dismissing;
    }

    fn set_state(&mut self, next: SheetState, host: &mut impl SheetHost) {
        let previous = self.state;
        self.state = next;
        if previous != next {
            host.state_changed(previous, next);
        }
    }

    fn start_tween(&mut self, target: SheetFrame, now_ms: u64) {
        self.tween = Some(Tween::new(
            self.frame,
            target,
            now_ms,
            self.config.animation_duration_ms,
        ));
        if let Some(tween) = &self.tween {
            trace!(target = ?tween.target(), "tween started");
        }
    }
}

fn hidden_frame(extents: &SheetExtents) -> SheetFrame {
    let mini = extents.extent(SheetState::Mini);
    SheetFrame {
        extent: mini,
        offset: mini,
        bar_offset: mini,
    }
}

fn rest_frame(extents: &SheetExtents, state: SheetState) -> SheetFrame {
    SheetFrame {
        extent: extents.extent(state),
        offset: 0.0,
        bar_offset: 0.0,
    }
}

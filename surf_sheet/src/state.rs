// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete sheet states and the gesture-end transition policy.
//!
//! The policy is a pure function of the state the sheet was resting in, the
//! live extent reached by the drag, and the drag direction. It partitions the
//! extent axis by the rest extents:
//!
//! | live extent                 | `Up`     | `Down`   |
//! |-----------------------------|----------|----------|
//! | `< dismiss`                 | dismiss  | dismiss  |
//! | `(dismiss, mini)`           | mini     | mini     |
//! | `(mini, half)`              | half     | mini     |
//! | `(half, full)`              | full     | half     |
//! | anything else               | current  | current  |
//!
//! "Anything else" covers extents exactly on a boundary, extents at or past
//! `full`, and NaN. The sheet then stays in its current state and settles back
//! to that state's extent.

use crate::error::{Result, SheetError};

/// Discrete rest states of the sheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SheetState {
    /// Compact state shown on first presentation.
    #[default]
    Mini,
    /// Intermediate state.
    Half,
    /// Expanded to the viewport height minus the top inset.
    Full,
    /// Collapsed out of view. Gestures are disabled until the sheet is
    /// presented again.
    Dismiss,
}

impl SheetState {
    /// All states, in increasing extent order.
    pub const ALL: [Self; 4] = [Self::Dismiss, Self::Mini, Self::Half, Self::Full];
}

/// Direction of a vertical drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragDirection {
    /// Toward the top of the viewport; grows the sheet.
    Up,
    /// Toward the bottom of the viewport; shrinks the sheet.
    Down,
}

impl DragDirection {
    /// Derives the direction from a cumulative vertical translation.
    ///
    /// Screen coordinates grow downward, so a positive translation is `Down`.
    /// Zero counts as `Up`.
    #[must_use]
    pub fn from_translation(translation_y: f64) -> Self {
        if translation_y > 0.0 { Self::Down } else { Self::Up }
    }
}

/// Rest extents for every [`SheetState`], validated to be strictly increasing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetExtents {
    dismiss: f64,
    mini: f64,
    half: f64,
    full: f64,
}

impl SheetExtents {
    /// Creates a validated set of extents.
    ///
    /// Fails unless every value is finite and
    /// `0 <= dismiss < mini < half < full`.
    pub fn new(dismiss: f64, mini: f64, half: f64, full: f64) -> Result<Self> {
        for (name, value) in [
            ("dismiss", dismiss),
            ("mini", mini),
            ("half", half),
            ("full", full),
        ] {
            if !value.is_finite() {
                return Err(SheetError::NonFinite { name, value });
            }
        }
        if !(0.0 <= dismiss && dismiss < mini && mini < half && half < full) {
            return Err(SheetError::InvalidOrdering {
                dismiss,
                mini,
                half,
                full,
            });
        }
        Ok(Self {
            dismiss,
            mini,
            half,
            full,
        })
    }

    /// Returns the rest extent of `state`.
    #[must_use]
    pub fn extent(&self, state: SheetState) -> f64 {
        match state {
            SheetState::Mini => self.mini,
            SheetState::Half => self.half,
            SheetState::Full => self.full,
            SheetState::Dismiss => self.dismiss,
        }
    }

    /// Computes the state a drag settles into when it ends.
    ///
    /// See the module docs for the full table. Total over every input.
    #[must_use]
    pub fn next_state(
        &self,
        current: SheetState,
        live_extent: f64,
        direction: DragDirection,
    ) -> SheetState {
        if live_extent < self.dismiss {
            return SheetState::Dismiss;
        }
        let between = |low: f64, high: f64| low < live_extent && live_extent < high;
        match direction {
            DragDirection::Up => {
                if between(self.dismiss, self.mini) {
                    SheetState::Mini
                } else if between(self.mini, self.half) {
                    SheetState::Half
                } else if between(self.half, self.full) {
                    SheetState::Full
                } else {
                    current
                }
            }
            DragDirection::Down => {
                if between(self.dismiss, self.mini) || between(self.mini, self.half) {
                    SheetState::Mini
                } else if between(self.half, self.full) {
                    SheetState::Half
                } else {
                    current
                }
            }
        }
    }
}

// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::controller::SheetFrame;

/// Time-based interpolation between two sheet frames.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tween {
    from: SheetFrame,
    to: SheetFrame,
    start_ms: u64,
    duration_ms: u64,
}

impl Tween {
    pub(crate) fn new(from: SheetFrame, to: SheetFrame, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub(crate) fn target(&self) -> SheetFrame {
        self.to
    }

    pub(crate) fn retarget_extent(&mut self, extent: f64) {
        self.to.extent = extent;
    }

    pub(crate) fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub(crate) fn sample(&self, now_ms: u64) -> SheetFrame {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = smoothstep(t);
        let lerp = |a: f64, b: f64| a + (b - a) * eased;
        SheetFrame {
            extent: lerp(self.from.extent, self.to.extent),
            offset: lerp(self.from.offset, self.to.offset),
            bar_offset: lerp(self.from.bar_offset, self.to.bar_offset),
        }
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(extent: f64) -> SheetFrame {
        SheetFrame {
            extent,
            offset: 0.0,
            bar_offset: 0.0,
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let tween = Tween::new(frame(305.0), frame(465.0), 1_000, 300);
        assert_eq!(tween.sample(1_000), frame(305.0));
        assert_eq!(tween.sample(1_300), frame(465.0));
        assert_eq!(tween.sample(9_999), frame(465.0));
        assert!(!tween.is_done(1_299));
        assert!(tween.is_done(1_300));
    }

    #[test]
    fn midpoint_is_halfway() {
        let tween = Tween::new(frame(0.0), frame(100.0), 0, 300);
        let mid = tween.sample(150);
        assert!((mid.extent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_is_clamped() {
        let tween = Tween::new(frame(0.0), frame(100.0), 10, 0);
        assert!(tween.is_done(11));
        assert_eq!(tween.sample(11), frame(100.0));
    }
}

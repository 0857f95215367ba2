use crate::constants::{ASSUME_STOPPED_MS, POINTER_HISTORY, VELOCITY_HORIZON_MS};
use glam::DVec2;
use picker_core::GestureSample;
use std::collections::VecDeque;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerPoint {
    pub t_ms: f64,
    pub pos: DVec2,
}

/// Follows one pointer from down to up and turns its positions into
/// cumulative translation plus a short-horizon velocity (px/ms).
#[derive(Default, Clone, Debug)]
pub struct PointerTracker {
    pointer_id: Option<i32>,
    origin: DVec2,
    history: VecDeque<PointerPoint>,
}

impl PointerTracker {
    pub fn begin(&mut self, pointer_id: i32, pos: DVec2, t_ms: f64) {
        self.pointer_id = Some(pointer_id);
        self.origin = pos;
        self.history.clear();
        self.push(PointerPoint { t_ms, pos });
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pointer_id.is_some()
    }

    #[inline]
    pub fn owns(&self, pointer_id: i32) -> bool {
        self.pointer_id == Some(pointer_id)
    }

    /// Sample for a move of the tracked pointer; other pointers are ignored.
    pub fn track(&mut self, pointer_id: i32, pos: DVec2, t_ms: f64) -> Option<GestureSample> {
        if !self.owns(pointer_id) {
            return None;
        }
        self.push(PointerPoint { t_ms, pos });
        Some(GestureSample::new(pos - self.origin, self.velocity(t_ms)))
    }

    /// Release sample; ends tracking.
    pub fn end(&mut self, pointer_id: i32, pos: DVec2, t_ms: f64) -> Option<GestureSample> {
        let sample = self.track(pointer_id, pos, t_ms)?;
        self.reset();
        Some(sample)
    }

    /// Interrupted gesture: keep the last position, drop any fling.
    pub fn cancel(&mut self, pointer_id: i32) -> Option<GestureSample> {
        if !self.owns(pointer_id) {
            return None;
        }
        let last = self.history.back().map(|p| p.pos).unwrap_or(self.origin);
        let sample = GestureSample::new(last - self.origin, DVec2::ZERO);
        self.reset();
        Some(sample)
    }

    /// Average velocity over the unbroken run of samples ending at the newest
    /// one, at most [`VELOCITY_HORIZON_MS`] long. A gap longer than
    /// [`ASSUME_STOPPED_MS`] ends the run, so a pause before release reads as
    /// zero.
    pub fn velocity(&self, now_ms: f64) -> DVec2 {
        let Some(&newest) = self.history.back() else {
            return DVec2::ZERO;
        };
        if now_ms - newest.t_ms > ASSUME_STOPPED_MS {
            return DVec2::ZERO;
        }
        let mut oldest = newest;
        for p in self.history.iter().rev().skip(1) {
            if newest.t_ms - p.t_ms > VELOCITY_HORIZON_MS || oldest.t_ms - p.t_ms > ASSUME_STOPPED_MS {
                break;
            }
            oldest = *p;
        }
        let dt = newest.t_ms - oldest.t_ms;
        if dt <= 0.0 {
            return DVec2::ZERO;
        }
        let v = (newest.pos - oldest.pos) / dt;
        if v.is_finite() {
            v
        } else {
            DVec2::ZERO
        }
    }

    fn push(&mut self, point: PointerPoint) {
        while self
            .history
            .front()
            .is_some_and(|p| point.t_ms - p.t_ms > VELOCITY_HORIZON_MS)
        {
            self.history.pop_front();
        }
        if self.history.len() == POINTER_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(point);
    }

    fn reset(&mut self) {
        self.pointer_id = None;
        self.history.clear();
    }
}

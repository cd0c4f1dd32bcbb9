//! Scroll state and the per-tick integrator step.

use serde::Serialize;

/// Offsets of the main strip, in strip units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    /// Offset currently applied to the strip
    pub current_offset: f32,
    /// Offset the strip is easing toward
    pub target_offset: f32,
    /// Upper end of the hard scroll range (never negative)
    pub max_offset: f32,
}

impl ScrollState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Store a new scroll range, floored at zero.
    pub fn set_max_offset(&mut self, max: f32) {
        self.max_offset = if max.is_finite() { max.max(0.0) } else { 0.0 };
    }

    /// Move the target by `delta`. Non-finite deltas are dropped.
    pub fn nudge_target(&mut self, delta: f32) {
        if delta.is_finite() {
            self.target_offset += delta;
        }
    }

    /// Replace the target. Non-finite targets are dropped.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target_offset = target;
        }
    }

    /// Clamp the target into `[0, max_offset]`.
    pub fn clamp_target_hard(&mut self) {
        self.target_offset = self.target_offset.clamp(0.0, self.max_offset.max(0.0));
    }

    /// Clamp the target into the elastic bound around `[0, max_offset]`.
    pub fn clamp_target_elastic(&mut self, margin: f32) {
        let (lo, hi) = elastic_bounds(self.max_offset, margin);
        self.target_offset = self.target_offset.clamp(lo, hi);
    }

    /// Close `easing` of the remaining gap. Returns the distance moved.
    pub fn ease(&mut self, easing: f32) -> f32 {
        let step = (self.target_offset - self.current_offset) * easing;
        self.current_offset += step;
        step
    }

    /// Whether the current offset is within `epsilon` of the target.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target_offset - self.current_offset).abs() <= epsilon
    }
}

/// `(-margin, max + margin)`.
pub fn elastic_bounds(max_offset: f32, margin: f32) -> (f32, f32) {
    let margin = margin.max(0.0);
    (-margin, max_offset.max(0.0) + margin)
}

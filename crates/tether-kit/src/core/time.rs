//! Host-owned time scaling (slow motion).
//!
//! Every system in this crate takes `dt` as an explicit parameter; nothing
//! reads ambient global time. `TimeControl` is the single place a host scales
//! its raw frame delta before feeding it to the other systems. Callers that
//! want unscaled behavior simply pass the raw delta instead.

use serde::{Deserialize, Serialize};

/// Fixed simulation step the scaled step is derived from, in seconds.
pub const FIXED_STEP: f32 = 0.02;

const NORMAL_SCALE: f32 = 1.0;

/// Slow-motion control owned by the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeControl {
    /// Time scale applied while slow motion is active.
    factor: f32,
    active: bool,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            factor: 0.25,
            active: false,
        }
    }
}

impl TimeControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factor(factor: f32) -> Self {
        Self {
            factor,
            active: false,
        }
    }

    /// Set the slow-motion factor outright, or add to it.
    pub fn set_factor(&mut self, factor: f32, absolute: bool) {
        self.factor = if absolute { factor } else { self.factor + factor };
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Enter slow motion.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Leave slow motion and restore the normal scale.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current time scale: the slow-motion factor while active, 1.0 otherwise.
    pub fn scale(&self) -> f32 {
        if self.active {
            self.factor
        } else {
            NORMAL_SCALE
        }
    }

    /// Scale a raw frame delta by the current time scale.
    pub fn scaled(&self, dt: f32) -> f32 {
        dt * self.scale()
    }

    /// Fixed timestep under the current scale.
    pub fn fixed_step(&self) -> f32 {
        self.scale() * FIXED_STEP
    }
}

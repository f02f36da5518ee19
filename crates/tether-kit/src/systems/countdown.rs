// systems/countdown.rs
//
// Countdown timer driven by host ticks.

/// Decrementing timer with pause support and a one-shot expiry signal.
///
/// The paused flag does double duty: a user pause and terminal expiry both
/// set it. Un-pausing an expired countdown therefore resumes ticking from
/// zero, and the next tick takes it negative, re-clamps, and signals expiry
/// again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining: f32,
    paused: bool,
}

impl Countdown {
    /// Start a running countdown with the given number of seconds remaining.
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            paused: false,
        }
    }

    /// Start a countdown in the paused state.
    pub fn new_paused(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            paused: true,
        }
    }

    /// Seconds left. Ticking clamps at zero; `adjust` does not.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the countdown has run to zero and parked itself.
    ///
    /// Derived from the shared pause flag, so a countdown manually paused at
    /// exactly zero reads as expired too.
    pub fn is_expired(&self) -> bool {
        self.paused && self.remaining == 0.0
    }

    /// Pause or resume ticking.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set the remaining time outright, or add to it (negative to shorten).
    /// No clamping is applied and an expired countdown is not re-armed.
    pub fn adjust(&mut self, seconds: f32, absolute: bool) {
        self.remaining = if absolute {
            seconds
        } else {
            self.remaining + seconds
        };
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// Returns `true` exactly when the remaining time crosses below zero this
    /// tick: the countdown clamps to zero and pauses itself. The pause check
    /// precedes the decrement, so a paused countdown never advances.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.paused {
            return false;
        }

        self.remaining -= dt;

        if self.remaining >= 0.0 {
            return false;
        }

        self.remaining = 0.0;
        self.paused = true;
        true
    }
}

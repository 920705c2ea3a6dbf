//! Countdown timers.
//!
//! Every cooldown in the simulation (mating, pickup respawn, attack charge,
//! agent respawn) is a [`Timer`]: a non-negative scalar advanced once per
//! simulation tick and clamped at zero. There is no scheduler thread.

/// Non-negative countdown, active while above zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    remaining: f32,
}

impl Timer {
    /// An elapsed timer.
    pub const READY: Timer = Timer { remaining: 0.0 };

    /// Start a countdown of `seconds`. Negative values clamp to zero.
    pub fn start(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
        }
    }

    /// Seconds left on the countdown.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True while the countdown has not reached zero.
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advance the countdown by `dt` seconds, clamping at zero.
    ///
    /// Returns true if the timer elapsed on this very tick (was active,
    /// now finished).
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        !self.is_active()
    }

    /// Reset to the elapsed state.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }
}

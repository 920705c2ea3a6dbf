//! Resource meters - the scalar economy gating survival and behavior.
//!
//! A meter is clamped to `[0, max]` on every mutation. The energy variant
//! decays passively each tick; the health variant only moves through damage
//! and heal events. Crossing thresholds (configured in
//! [`crate::config::SimConfig`]) enables foraging and mating; reaching zero
//! terminates the agent.

/// Clamped scalar resource (energy or health).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: f32,
    max: f32,
}

impl ResourceMeter {
    /// Create a meter with the given starting value, clamped to `[0, max]`.
    pub fn new(current: f32, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    /// Create a meter filled to its maximum.
    pub fn full(max: f32) -> Self {
        Self::new(max, max)
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// True once the meter has hit zero.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// True when the meter sits at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Add to the meter, clamping at the maximum.
    pub fn gain(&mut self, amount: f32) {
        self.set(self.current + amount.max(0.0));
    }

    /// Subtract from the meter, clamping at zero.
    pub fn drain(&mut self, amount: f32) {
        self.set(self.current - amount.max(0.0));
    }

    /// Restore the meter to its maximum.
    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Overwrite the current value, clamped to `[0, max]`.
    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    /// Empty the meter and return what it held.
    ///
    /// Used by the eat interaction: the predator absorbs the prey's entire
    /// resource.
    pub fn take_all(&mut self) -> f32 {
        let taken = self.current;
        self.current = 0.0;
        taken
    }
}

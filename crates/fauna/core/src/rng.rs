//! Deterministic random placement.
//!
//! Spawn positions (scenario seeding, energy reseeding) are the only random
//! inputs of the core. They come from a PCG-XSH-RR generator keyed off the
//! simulation seed and a per-draw nonce, so the same seed always replays the
//! same world.

use crate::state::Position;

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Deterministic, small, and
/// passes the usual statistical batteries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRng {
    seed: u64,
    nonce: u64,
}

impl SpawnRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next raw draw. Each call consumes one nonce.
    pub fn next_u32(&mut self) -> u32 {
        let mixed = self
            .seed
            .wrapping_add(self.nonce.wrapping_mul(0x9e3779b97f4a7c15));
        self.nonce = self.nonce.wrapping_add(1);
        Self::pcg_output(Self::pcg_step(mixed))
    }

    /// Uniform value in `[-extent, extent]`.
    pub fn coordinate(&mut self, extent: f32) -> f32 {
        let unit = self.next_u32() as f32 / u32::MAX as f32;
        (unit * 2.0 - 1.0) * extent
    }

    /// Uniform position in the square `[-extent, extent]^2`.
    pub fn position(&mut self, extent: f32) -> Position {
        Position::new(self.coordinate(extent), self.coordinate(extent))
    }
}

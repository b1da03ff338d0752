//! RNG module - random drift for block placement
//!
//! Every placement after the first drifts the new block horizontally by a
//! random offset. The engine draws offsets through the [`RandomSource`]
//! trait, so gameplay uses a seeded LCG while tests can script an exact
//! offset sequence.

/// Source of placement offsets.
///
/// Implementations must be deterministic for a given starting state; the
/// engine relies on this for reproducible games.
pub trait RandomSource: std::fmt::Debug + Send {
    /// Draw the next value in `[lo, hi]`, both ends inclusive.
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl RandomSource for SimpleRng {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u32;
        lo + self.next_range(span) as i32
    }
}

/// Replays a fixed offset sequence, for deterministic tests.
///
/// Once the script runs out the last value repeats forever; an empty script
/// always yields `lo`. Drawn values are clamped into the requested range so
/// the [`RandomSource`] contract holds for any script.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<i32>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<i32>) -> Self {
        Self { script, index: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        let value = match self.script.get(self.index) {
            Some(&v) => {
                self.index += 1;
                v
            }
            None => self.script.last().copied().unwrap_or(lo),
        };
        value.clamp(lo, hi)
    }
}

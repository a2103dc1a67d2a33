//! Random source seam
//!
//! The core draws at most two values per resolution: the non-player
//! critical roll and the variance roll, in that order.

use rand::Rng;

/// Uniform random floats in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Always returns the same draw
///
/// `FixedRoll(0.5)` yields a variance multiplier of exactly 1.0 and never
/// rolls a non-player critical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoll(pub f32);

impl RandomSource for FixedRoll {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}

/// Replays a list of draws, repeating the last one once exhausted
#[derive(Debug, Clone, PartialEq)]
pub struct RollSequence {
    rolls: Vec<f32>,
    cursor: usize,
}

impl RollSequence {
    pub fn new(rolls: Vec<f32>) -> Self {
        RollSequence { rolls, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for RollSequence {
    fn next_unit(&mut self) -> f32 {
        let roll = match self.rolls.get(self.cursor) {
            Some(r) => *r,
            None => self.rolls.last().copied().unwrap_or(0.5),
        };
        self.cursor += 1;
        roll
    }
}

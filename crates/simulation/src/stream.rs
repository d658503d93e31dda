//! Bounded linear-congruential random stream.

use thiserror::Error;

/// The stream has handed out its whole budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("random stream exhausted after {budget} draws")]
pub struct StreamExhausted {
    /// Budget the stream was reset with.
    pub budget: u64,
}

/// Deterministic uniform variate generator with a fixed draw budget.
///
/// Uses the recurrence `x' = (a * x + c) mod 2^32` and returns `x' / 2^32`,
/// so every variate lies in `[0, 1)`. The sequence is a pure function of
/// `(seed, budget)`.
#[derive(Debug, Clone)]
pub struct LcgStream {
    state: u32,
    budget: u64,
    remaining: u64,
}

impl LcgStream {
    /// Recurrence multiplier.
    pub const MULTIPLIER: u32 = 1_664_525;
    /// Recurrence increment.
    pub const INCREMENT: u32 = 1_013_904_223;
    /// Recurrence modulus, `2^32`.
    pub const MODULUS: f64 = 4_294_967_296.0;

    /// Create a stream that will issue exactly `budget` variates.
    pub fn new(seed: u64, budget: u64) -> Self {
        let mut stream = Self {
            state: 0,
            budget: 0,
            remaining: 0,
        };
        stream.reset(seed, budget);
        stream
    }

    /// Re-initialize the stream, discarding anything drawn so far.
    pub fn reset(&mut self, seed: u64, budget: u64) {
        // Only the residue mod 2^32 affects the recurrence.
        self.state = seed as u32;
        self.budget = budget;
        self.remaining = budget;
    }

    /// Draw the next variate in `[0, 1)`.
    ///
    /// Fails without touching the stream once the budget is spent.
    pub fn draw(&mut self) -> Result<f64, StreamExhausted> {
        if self.remaining == 0 {
            return Err(StreamExhausted {
                budget: self.budget,
            });
        }
        self.remaining -= 1;
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        Ok(f64::from(self.state) / Self::MODULUS)
    }

    /// Variates still available.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Variates issued since the last reset.
    pub fn drawn(&self) -> u64 {
        self.budget - self.remaining
    }

    /// Whether the budget is spent.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

//! Random Move Opponent
//!
//! Picks Rock, Paper or Scissors uniformly at random every round.
//! Useful for:
//! - Exercising the GUI and statistics before a learning opponent exists
//! - Baseline comparisons (a long session should hover around 1/3 each)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rps_core::{Move, Opponent, RoundTracker};

#[cfg(test)]
mod lib_tests;

/// An opponent that ignores history and plays a random move.
///
/// Construct with [`RandomOpponent::with_seed`] for a reproducible sequence.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, _history: &RoundTracker) -> Move {
        *Move::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Move::Rock)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn new_session(&mut self) {
        // a seeded opponent replays the same sequence every session
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}

//! Append-only log of completed rounds and the statistics derived from it

use serde::{Deserialize, Serialize};

use crate::classify::classify_outcome;
use crate::error::InvalidMoveError;
use crate::rules::judge;
use crate::types::{Counts, Move, Outcome, RateSample, Round};

/// Optional result supplied alongside a round.
///
/// A known [`Outcome`] is taken as-is; free text goes through the keyword
/// classifier in [`crate::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeHint {
    /// A typed result, recorded as-is
    Outcome(Outcome),
    /// Free text, always run through the keyword rules.
    ///
    /// The only canonical text names are `player`, `ai` and `tie`. Variant
    /// names are not special: `"OpponentWin"` contains `win` and no `ai`, so
    /// it classifies as a player win. Use [`OutcomeHint::Outcome`] for typed
    /// results.
    Text(String),
}

impl OutcomeHint {
    pub fn resolve(&self) -> Outcome {
        match self {
            OutcomeHint::Outcome(outcome) => *outcome,
            OutcomeHint::Text(text) => classify_outcome(text),
        }
    }
}

impl From<Outcome> for OutcomeHint {
    fn from(outcome: Outcome) -> Self {
        OutcomeHint::Outcome(outcome)
    }
}

impl From<&str> for OutcomeHint {
    fn from(text: &str) -> Self {
        OutcomeHint::Text(text.to_string())
    }
}

impl From<String> for OutcomeHint {
    fn from(text: String) -> Self {
        OutcomeHint::Text(text)
    }
}

/// Ordered record of every round played in a session.
///
/// Rounds are only ever appended; position in the log is the round number
/// used by the cumulative queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundTracker {
    rounds: Vec<Round>,
}

impl RoundTracker {
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Validate both moves and append a round.
    ///
    /// Without a hint the outcome follows the beats table. A hint always
    /// wins over the table. Nothing is appended when either move is invalid.
    pub fn record(
        &mut self,
        player_move: &str,
        opponent_move: &str,
        hint: Option<OutcomeHint>,
    ) -> Result<&Round, InvalidMoveError> {
        let player: Move = player_move.parse()?;
        let opponent: Move = opponent_move.parse()?;
        Ok(self.push(player, opponent, hint))
    }

    /// Append a round from already-validated moves
    pub fn push(&mut self, player: Move, opponent: Move, hint: Option<OutcomeHint>) -> &Round {
        let outcome = match hint {
            Some(hint) => hint.resolve(),
            None => judge(player, opponent),
        };
        self.rounds.push(Round::new(player, opponent, outcome));
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// The most recent `n` rounds, oldest first
    pub fn last_rounds(&self, n: usize) -> &[Round] {
        let start = self.rounds.len().saturating_sub(n);
        &self.rounds[start..]
    }

    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        for round in &self.rounds {
            counts.add(round.outcome());
        }
        counts
    }

    /// Running rates after every round, recomputed from the full log.
    ///
    /// With `exclude_ties` the denominator is the number of decisive rounds
    /// so far; every rate is `0.0` until the first decisive round, and the
    /// tie component is always `0.0`.
    pub fn cumulative_rate_history(&self, exclude_ties: bool) -> Vec<RateSample> {
        let mut running = Counts::default();
        let mut history = Vec::with_capacity(self.rounds.len());

        for (i, round) in self.rounds.iter().enumerate() {
            running.add(round.outcome());

            let sample = if exclude_ties {
                let denom = running.decisive();
                if denom > 0 {
                    RateSample {
                        player: running.player_wins as f64 / denom as f64,
                        opponent: running.opponent_wins as f64 / denom as f64,
                        tie: 0.0,
                    }
                } else {
                    RateSample::default()
                }
            } else {
                let n = (i + 1) as f64;
                RateSample {
                    player: running.player_wins as f64 / n,
                    opponent: running.opponent_wins as f64 / n,
                    tie: running.ties as f64 / n,
                }
            };
            history.push(sample);
        }

        history
    }

    /// Cumulative player win rate after each round
    pub fn win_rate_history(&self, exclude_ties: bool) -> Vec<f64> {
        self.cumulative_rate_history(exclude_ties)
            .into_iter()
            .map(|s| s.player)
            .collect()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;

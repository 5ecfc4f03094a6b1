//! Game session: the state one player's sitting owns

use rps_core::{Counts, InvalidMoveError, Move, Opponent, OutcomeHint, Round, RoundTracker};
use serde::Serialize;
use tracing::{debug, info};

use crate::chart::{LastMovesStrip, WinRatePlot};
use crate::config::SessionConfig;
use crate::report::SessionSummary;

/// What a front-end needs after each round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub round: Round,
    /// 1-based
    pub round_number: usize,
    /// Scores after this round
    pub counts: Counts,
}

impl RoundReport {
    /// Two-line message for the result area
    pub fn display_text(&self) -> String {
        format!(
            "You chose {} | AI chose {}\nResult: {}",
            self.round.player_move(),
            self.round.opponent_move(),
            self.round.outcome()
        )
    }

    pub fn score_text(&self) -> String {
        score_text(&self.counts)
    }
}

/// `Score: Player X - AI Y`
pub fn score_text(counts: &Counts) -> String {
    format!(
        "Score: Player {} - AI {}",
        counts.player_wins, counts.opponent_wins
    )
}

/// Owns the round log and the opponent for one sitting.
///
/// Front-ends hold a `GameSession` and route every move through it; the
/// score is always derived from the log, never kept on the side.
pub struct GameSession {
    tracker: RoundTracker,
    opponent: Box<dyn Opponent>,
    exclude_ties: bool,
    last_moves: usize,
}

impl GameSession {
    pub fn new(opponent: Box<dyn Opponent>, config: &SessionConfig) -> Self {
        info!(
            opponent = opponent.name(),
            exclude_ties = config.exclude_ties,
            "starting session"
        );
        Self {
            tracker: RoundTracker::new(),
            opponent,
            exclude_ties: config.exclude_ties,
            last_moves: config.last_moves,
        }
    }

    /// Play one round: the opponent answers `player_move` and the outcome
    /// follows the rules.
    pub fn play(&mut self, player_move: &str) -> Result<RoundReport, InvalidMoveError> {
        let player: Move = player_move.parse()?;
        Ok(self.play_move(player))
    }

    pub fn play_move(&mut self, player: Move) -> RoundReport {
        let opponent = self.opponent.choose(&self.tracker);
        let round = *self.tracker.push(player, opponent, None);
        self.report(round)
    }

    /// Record a round played elsewhere, optionally with a result string.
    pub fn record(
        &mut self,
        player_move: &str,
        opponent_move: &str,
        hint: Option<OutcomeHint>,
    ) -> Result<RoundReport, InvalidMoveError> {
        let round = *self.tracker.record(player_move, opponent_move, hint)?;
        Ok(self.report(round))
    }

    fn report(&self, round: Round) -> RoundReport {
        let report = RoundReport {
            round,
            round_number: self.tracker.len(),
            counts: self.tracker.counts(),
        };
        debug!(
            round = report.round_number,
            player = %round.player_move(),
            opponent = %round.opponent_move(),
            outcome = round.outcome().as_str(),
            "round recorded"
        );
        report
    }

    /// Drop the log and start over with the same opponent
    pub fn reset(&mut self) {
        info!(rounds = self.tracker.len(), "resetting session");
        self.tracker = RoundTracker::new();
        self.opponent.new_session();
    }

    pub fn scores(&self) -> Counts {
        self.tracker.counts()
    }

    pub fn tracker(&self) -> &RoundTracker {
        &self.tracker
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    pub fn exclude_ties(&self) -> bool {
        self.exclude_ties
    }

    pub fn set_exclude_ties(&mut self, exclude_ties: bool) {
        self.exclude_ties = exclude_ties;
    }

    pub fn win_rate_plot(&self) -> WinRatePlot {
        WinRatePlot::from_tracker(&self.tracker, self.exclude_ties)
    }

    pub fn last_moves(&self) -> LastMovesStrip {
        LastMovesStrip::from_tracker(&self.tracker, self.last_moves)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self.opponent.name(), &self.tracker, self.exclude_ties)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

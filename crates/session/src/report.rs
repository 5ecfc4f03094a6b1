//! Session summaries and reporting

use rps_core::{Counts, RateSample, Round, RoundTracker};
use serde::Serialize;

/// Everything a session produced, ready to print or serialize
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub opponent: String,
    pub exclude_ties: bool,
    pub rounds: Vec<Round>,
    pub counts: Counts,
    /// Player win rate after the final round (0.0 for an empty session)
    pub win_rate: f64,
    pub history: Vec<RateSample>,
}

impl SessionSummary {
    pub fn new(opponent: &str, tracker: &RoundTracker, exclude_ties: bool) -> Self {
        let history = tracker.cumulative_rate_history(exclude_ties);
        Self {
            opponent: opponent.to_string(),
            exclude_ties,
            rounds: tracker.rounds().to_vec(),
            counts: tracker.counts(),
            win_rate: history.last().map(|s| s.player).unwrap_or(0.0),
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Session vs {} ===\n\n", self.opponent));
        report.push_str(&format!(
            "Rounds: {}  Player {} - AI {} - Ties {}\n",
            self.counts.total(),
            self.counts.player_wins,
            self.counts.opponent_wins,
            self.counts.ties
        ));
        report.push_str(&format!(
            "Win rate{}: {:.1}%\n\n",
            if self.exclude_ties { " (ties excluded)" } else { "" },
            self.win_rate * 100.0
        ));

        report.push_str(&format!(
            "{:>5} {:>6} {:>6} {:<7} {:>8}\n",
            "Round", "Player", "AI", "Result", "Rate"
        ));
        report.push_str(&"-".repeat(36));
        report.push('\n');

        for (i, (round, sample)) in self.rounds.iter().zip(&self.history).enumerate() {
            report.push_str(&format!(
                "{:>5} {:>6} {:>6} {:<7} {:>7.1}%\n",
                i + 1,
                round.player_move().to_string(),
                round.opponent_move().to_string(),
                round.outcome().as_str(),
                sample.player * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

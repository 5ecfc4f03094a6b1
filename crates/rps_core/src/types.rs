use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidMoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "R")]
    Rock,
    #[serde(rename = "P")]
    Paper,
    #[serde(rename = "S")]
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses the single-letter codes `R`, `P`, `S` in either case.
impl FromStr for Move {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "R" => Ok(Move::Rock),
            "P" => Ok(Move::Paper),
            "S" => Ok(Move::Scissors),
            _ => Err(InvalidMoveError::new(s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "player")]
    PlayerWin,
    #[serde(rename = "ai")]
    OpponentWin,
    #[serde(rename = "tie")]
    Tie,
}

impl Outcome {
    pub fn is_decisive(self) -> bool {
        self != Outcome::Tie
    }

    /// Short name used in reports and JSON (`player`, `ai`, `tie`)
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "player",
            Outcome::OpponentWin => "ai",
            Outcome::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "You win!"),
            Outcome::OpponentWin => write!(f, "AI wins!"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// One completed round. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    player_move: Move,
    opponent_move: Move,
    outcome: Outcome,
}

impl Round {
    pub(crate) fn new(player_move: Move, opponent_move: Move, outcome: Outcome) -> Self {
        Self {
            player_move,
            opponent_move,
            outcome,
        }
    }

    pub fn player_move(&self) -> Move {
        self.player_move
    }

    pub fn opponent_move(&self) -> Move {
        self.opponent_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Win/loss/tie totals over a tracker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub ties: u32,
}

impl Counts {
    pub fn total(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.ties
    }

    pub fn decisive(&self) -> u32 {
        self.player_wins + self.opponent_wins
    }

    pub(crate) fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::OpponentWin => self.opponent_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Cumulative rates after one round. Each component lies in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSample {
    pub player: f64,
    pub opponent: f64,
    pub tie: f64,
}

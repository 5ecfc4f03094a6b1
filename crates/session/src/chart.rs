//! Chart data for display layers
//!
//! Nothing here draws. A front-end turns a [`WinRatePlot`] or
//! [`LastMovesStrip`] into pixels on whatever surface it owns; see
//! [`crate::save_figure`] for the SVG export.

use rps_core::{Move, Round, RoundTracker};
use serde::Serialize;

pub const WIN_RATE_TITLE: &str = "Cumulative Player Win Rate";
pub const WIN_RATE_X_LABEL: &str = "Round";
pub const WIN_RATE_Y_LABEL: &str = "Player win rate";

/// Padding added above and below the data range. On data clamped to
/// `[0, 1]` it also keeps the y span at least this wide.
const Y_PADDING: f64 = 0.05;
/// Label offset above the last point, as a fraction of the y span
const LABEL_OFFSET: f64 = 0.04;

/// RGB colour per move, plus the empty-slot colour
pub fn move_rgb(mv: Option<Move>) -> (u8, u8, u8) {
    match mv {
        Some(Move::Rock) => (0xe4, 0x1a, 0x1c),
        Some(Move::Paper) => (0x37, 0x7e, 0xb8),
        Some(Move::Scissors) => (0x4d, 0xaf, 0x4a),
        None => (0xdd, 0xdd, 0xdd),
    }
}

/// Colour of the win-rate line and its label
pub const LINE_RGB: (u8, u8, u8) = (0x2c, 0x7f, 0xb8);

/// Label attached to the most recent point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    /// Where the text sits (slightly above the point)
    pub label_y: f64,
    pub text: String,
}

/// Cumulative win-rate line with axis limits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRatePlot {
    /// `(round, rate)` with rounds numbered from 1
    pub points: Vec<(f64, f64)>,
    pub y_min: f64,
    pub y_max: f64,
    pub annotation: Option<Annotation>,
}

impl WinRatePlot {
    /// Build a plot from per-round rates. Values outside `[0, 1]` are
    /// clamped into it.
    pub fn from_history(history: &[f64]) -> Self {
        let history: Vec<f64> = history.iter().map(|r| r.clamp(0.0, 1.0)).collect();
        let points: Vec<(f64, f64)> = history
            .iter()
            .enumerate()
            .map(|(i, &rate)| ((i + 1) as f64, rate))
            .collect();

        let Some(&last) = history.last() else {
            return Self {
                points,
                y_min: 0.0,
                y_max: 1.0,
                annotation: None,
            };
        };

        let lo = history.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let y_min = (lo - Y_PADDING).max(0.0);
        let y_max = (hi + Y_PADDING).min(1.0);

        let annotation = Annotation {
            x: history.len() as f64,
            y: last,
            label_y: last + (y_max - y_min) * LABEL_OFFSET,
            text: format!("{:.1}%", last * 100.0),
        };

        Self {
            points,
            y_min,
            y_max,
            annotation: Some(annotation),
        }
    }

    pub fn from_tracker(tracker: &RoundTracker, exclude_ties: bool) -> Self {
        Self::from_history(&tracker.win_rate_history(exclude_ties))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Horizontal extent, at least `[1, 2]` so a single point is drawable
    pub fn x_range(&self) -> (f64, f64) {
        (1.0, (self.points.len() as f64).max(2.0))
    }
}

/// One column of the strip; `None` slots pad a short history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveSlot {
    pub player: Option<Move>,
    pub opponent: Option<Move>,
}

impl MoveSlot {
    pub const EMPTY: MoveSlot = MoveSlot {
        player: None,
        opponent: None,
    };

    fn from_round(round: &Round) -> Self {
        Self {
            player: Some(round.player_move()),
            opponent: Some(round.opponent_move()),
        }
    }
}

/// The last `n` moves of both sides, oldest on the left
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastMovesStrip {
    pub title: String,
    pub slots: Vec<MoveSlot>,
}

impl LastMovesStrip {
    pub fn from_tracker(tracker: &RoundTracker, n: usize) -> Self {
        let recent = tracker.last_rounds(n);
        let mut slots = vec![MoveSlot::EMPTY; n - recent.len()];
        slots.extend(recent.iter().map(MoveSlot::from_round));

        Self {
            title: format!("Last {n} moves"),
            slots,
        }
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod chart_tests;

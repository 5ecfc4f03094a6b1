//! Session layer for the Rock-Paper-Scissors learner
//!
//! This crate provides:
//! - A [`GameSession`] that owns the round log, the opponent and the score
//! - Opponent selection from short spec strings (`fixed:P`, `random:7`)
//! - Chart data (win-rate plot, last-moves strip) for any display layer
//! - Text and JSON session summaries
//! - An SVG figure combining the win-rate plot and the last-moves strip
//!
//! # Usage
//!
//! ```bash
//! # Play against the random opponent in the terminal
//! cargo run -p session -- --opponent random play
//!
//! # Replay the sample rounds and print the summary as JSON
//! cargo run -p session -- demo --json
//!
//! # Write the sample statistics figure
//! cargo run -p session -- demo --out sample_stats.svg
//! ```

mod chart;
mod config;
mod error;
mod figure;
mod opponent;
mod report;
mod session;

pub use chart::*;
pub use config::*;
pub use error::*;
pub use figure::*;
pub use opponent::*;
pub use report::*;
pub use session::*;

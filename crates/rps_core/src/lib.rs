pub mod classify;
pub mod error;
pub mod rules;
pub mod tracker;
pub mod types;

pub use classify::{classify_outcome, explain_outcome, Classification};
pub use error::InvalidMoveError;
pub use rules::judge;
pub use tracker::{OutcomeHint, RoundTracker};
pub use types::*;

// =============================================================================
// Opponent trait — implemented by everything that picks the other side's move
// =============================================================================

/// Trait that all opponents must implement.
///
/// An opponent sees the rounds played so far and answers with a move for the
/// next one. Implementations are free to ignore the history.
pub trait Opponent: Send {
    /// Choose the move for the upcoming round
    fn choose(&mut self, history: &RoundTracker) -> Move;

    /// Display name
    fn name(&self) -> &str;

    /// Reset internal state when a new session starts
    fn new_session(&mut self) {}
}

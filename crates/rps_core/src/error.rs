use thiserror::Error;

/// A move identifier outside `R`, `P`, `S` (case-insensitive).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("moves must be one of 'R', 'P', or 'S' (got {input:?})")]
pub struct InvalidMoveError {
    pub input: String,
}

impl InvalidMoveError {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

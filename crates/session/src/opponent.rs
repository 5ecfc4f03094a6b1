//! Built-in opponents and lookup by name

use random_opponent::RandomOpponent;
use rps_core::{Move, Opponent, RoundTracker};

use crate::error::ConfigError;

/// Always answers with the same move.
///
/// The default answers Paper, which is what the game did before any
/// opponent logic existed.
#[derive(Debug, Clone)]
pub struct FixedOpponent {
    mv: Move,
    name: String,
}

impl FixedOpponent {
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            name: format!("Fixed ({})", mv.name()),
        }
    }
}

impl Default for FixedOpponent {
    fn default() -> Self {
        Self::new(Move::Paper)
    }
}

impl Opponent for FixedOpponent {
    fn choose(&mut self, _history: &RoundTracker) -> Move {
        self.mv
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build an opponent from a spec string.
///
/// Accepted forms: `fixed`, `fixed:<R|P|S>`, `random`, `random:<seed>`.
/// The kind is case-insensitive.
pub fn create_opponent(spec: &str) -> Result<Box<dyn Opponent>, ConfigError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };

    match (kind.trim().to_lowercase().as_str(), arg) {
        ("fixed" | "constant", None) => Ok(Box::new(FixedOpponent::default())),
        ("fixed" | "constant", Some(mv)) => {
            let mv: Move = mv
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownOpponent(spec.to_string()))?;
            Ok(Box::new(FixedOpponent::new(mv)))
        }
        ("random" | "rand", None) => Ok(Box::new(RandomOpponent::new())),
        ("random" | "rand", Some(seed)) => {
            let seed: u64 = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownOpponent(spec.to_string()))?;
            Ok(Box::new(RandomOpponent::with_seed(seed)))
        }
        _ => Err(ConfigError::UnknownOpponent(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_defaults_to_paper() {
        let mut opponent = create_opponent("fixed").unwrap();
        assert_eq!(opponent.choose(&RoundTracker::new()), Move::Paper);
        assert_eq!(opponent.name(), "Fixed (Paper)");
    }

    #[test]
    fn test_fixed_with_move() {
        let mut opponent = create_opponent("Fixed:s").unwrap();
        assert_eq!(opponent.choose(&RoundTracker::new()), Move::Scissors);
    }

    #[test]
    fn test_random_with_seed() {
        let mut opponent = create_opponent("random:9").unwrap();
        let mut reference = RandomOpponent::with_seed(9);
        let history = RoundTracker::new();
        for _ in 0..10 {
            assert_eq!(opponent.choose(&history), reference.choose(&history));
        }
        assert_eq!(opponent.name(), "Random");
    }

    #[test]
    fn test_unknown_specs_rejected() {
        for spec in ["", "neural", "fixed:X", "random:abc", "fixed:rock"] {
            assert!(
                matches!(create_opponent(spec), Err(ConfigError::UnknownOpponent(_))),
                "{spec:?} should be rejected"
            );
        }
    }
}

use crate::types::{Move, Outcome};

/// Outcome of `player` against `opponent` under the standard beats table.
pub fn judge(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats() == opponent {
        Outcome::PlayerWin
    } else {
        Outcome::OpponentWin
    }
}

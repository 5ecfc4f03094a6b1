use super::*;

#[test]
fn test_normalize_strips_punctuation_and_case() {
    assert_eq!(normalize("  You WIN!! "), "you win");
    assert_eq!(normalize("AI-Wins :)"), "aiwins ");
    assert_eq!(normalize("round 3: tie"), "round  tie");
}

#[test]
fn test_canonical_names_round_trip() {
    assert_eq!(classify_outcome("player"), Outcome::PlayerWin);
    assert_eq!(classify_outcome("ai"), Outcome::OpponentWin);
    assert_eq!(classify_outcome("tie"), Outcome::Tie);
}

#[test]
fn test_single_letters() {
    assert_eq!(explain_outcome("P").rule, Some("player-letter"));
    assert_eq!(explain_outcome("a.").rule, Some("ai-letter"));
    // trailing punctuation leaves a space behind, so the exact match fails
    assert_eq!(classify_outcome("p !"), Outcome::Tie);
}

#[test]
fn test_player_phrases() {
    assert_eq!(classify_outcome("You win!!"), Outcome::PlayerWin);
    assert_eq!(classify_outcome("Player wins"), Outcome::PlayerWin);
    assert_eq!(classify_outcome("WIN"), Outcome::PlayerWin);
    assert_eq!(explain_outcome("You win!!").rule, Some("you-and-win"));
    assert_eq!(explain_outcome("Winner").rule, Some("bare-win"));
}

#[test]
fn test_opponent_phrases() {
    assert_eq!(classify_outcome("AI Wins!"), Outcome::OpponentWin);
    assert_eq!(classify_outcome("the computer"), Outcome::OpponentWin);
    assert_eq!(classify_outcome("you lose"), Outcome::OpponentWin);
    assert_eq!(explain_outcome("AI Wins!").rule, Some("ai-keyword"));
}

#[test]
fn test_precedence_is_literal() {
    // "win" without "ai"/"lose" is a player win even when a computer wins
    assert_eq!(explain_outcome("Computer wins").rule, Some("bare-win"));
    // "you" + "win" beats the ai keyword
    assert_eq!(classify_outcome("AI says you win"), Outcome::PlayerWin);
    // "player" anywhere takes priority
    assert_eq!(classify_outcome("player loses to ai"), Outcome::PlayerWin);
    // "ai" hidden inside a word still counts
    assert_eq!(classify_outcome("Again"), Outcome::OpponentWin);
    // "lose" disables the bare win rule, then "you"+"lose" is not present
    assert_eq!(classify_outcome("win or lose"), Outcome::Tie);
}

#[test]
fn test_fallback_is_tie() {
    for text in ["", "   ", "draw", "???", "1-1", "It's a tie"] {
        let c = explain_outcome(text);
        assert_eq!(c.outcome, Outcome::Tie, "{text:?}");
        assert_eq!(c.rule, None, "{text:?}");
    }
}

#[test]
fn test_rules_are_ordered_player_first() {
    let first_opponent = OUTCOME_RULES
        .iter()
        .position(|r| r.outcome == Outcome::OpponentWin)
        .unwrap();
    assert!(
        OUTCOME_RULES[first_opponent..]
            .iter()
            .all(|r| r.outcome == Outcome::OpponentWin)
    );
    assert!(OUTCOME_RULES.iter().all(|r| r.outcome != Outcome::Tie));
}

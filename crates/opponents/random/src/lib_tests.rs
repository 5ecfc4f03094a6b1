use super::*;

fn play(opponent: &mut RandomOpponent, rounds: usize) -> Vec<Move> {
    let history = RoundTracker::new();
    (0..rounds).map(|_| opponent.choose(&history)).collect()
}

#[test]
fn random_opponent_is_reproducible_with_seed() {
    let mut a = RandomOpponent::with_seed(42);
    let mut b = RandomOpponent::with_seed(42);

    assert_eq!(play(&mut a, 50), play(&mut b, 50));
}

#[test]
fn random_opponent_restarts_sequence_on_new_session() {
    let mut opponent = RandomOpponent::with_seed(7);
    let first = play(&mut opponent, 20);

    opponent.new_session();
    let second = play(&mut opponent, 20);

    assert_eq!(first, second);
}

#[test]
fn random_opponent_plays_every_move() {
    let mut opponent = RandomOpponent::with_seed(1);
    let moves = play(&mut opponent, 300);

    for mv in Move::ALL {
        assert!(moves.contains(&mv), "{mv} never played");
    }
}

#[test]
fn random_opponent_ignores_history() {
    let mut with_history = RandomOpponent::with_seed(3);
    let mut without = RandomOpponent::with_seed(3);

    let mut tracker = RoundTracker::new();
    tracker.record("R", "S", None).unwrap();

    for _ in 0..10 {
        assert_eq!(
            with_history.choose(&tracker),
            without.choose(&RoundTracker::new())
        );
    }
}

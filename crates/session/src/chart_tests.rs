use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_empty_plot_uses_unit_range() {
    let plot = WinRatePlot::from_history(&[]);
    assert!(plot.is_empty());
    assert_eq!((plot.y_min, plot.y_max), (0.0, 1.0));
    assert!(plot.annotation.is_none());
    assert_eq!(plot.x_range(), (1.0, 2.0));
}

#[test]
fn test_limits_pad_data_range() {
    let plot = WinRatePlot::from_history(&[0.5, 0.25, 0.4]);
    assert!(approx(plot.y_min, 0.20));
    assert!(approx(plot.y_max, 0.55));
    assert_eq!(plot.points[1], (2.0, 0.25));
    assert_eq!(plot.x_range(), (1.0, 3.0));
}

#[test]
fn test_limits_clamp_to_unit_interval() {
    let plot = WinRatePlot::from_history(&[1.0, 0.0]);
    assert_eq!((plot.y_min, plot.y_max), (0.0, 1.0));
}

#[test]
fn test_single_value_keeps_padding() {
    // 1.0 everywhere: padding clamps to [0.95, 1.0]
    let plot = WinRatePlot::from_history(&[1.0, 1.0]);
    assert!(approx(plot.y_min, 0.95));
    assert!(approx(plot.y_max, 1.0));

    // zero everywhere: [0.0, 0.05]
    let plot = WinRatePlot::from_history(&[0.0]);
    assert!(approx(plot.y_min, 0.0));
    assert!(approx(plot.y_max, 0.05));
}

#[test]
fn test_annotation_on_last_point() {
    let plot = WinRatePlot::from_history(&[1.0, 0.5, 1.0 / 3.0]);
    let note = plot.annotation.unwrap();
    assert_eq!(note.text, "33.3%");
    assert!(approx(note.x, 3.0));
    assert!(approx(note.y, 1.0 / 3.0));
    assert!(note.label_y > note.y);
    assert!(approx(note.label_y - note.y, (plot.y_max - plot.y_min) * 0.04));
}

#[test]
fn test_plot_from_tracker() {
    let mut tracker = RoundTracker::new();
    tracker.record("R", "S", None).unwrap();
    tracker.record("P", "P", None).unwrap();

    let with_ties = WinRatePlot::from_tracker(&tracker, false);
    assert_eq!(with_ties.points, vec![(1.0, 1.0), (2.0, 0.5)]);

    let without = WinRatePlot::from_tracker(&tracker, true);
    assert_eq!(without.points, vec![(1.0, 1.0), (2.0, 1.0)]);
}

#[test]
fn test_strip_pads_short_history() {
    let mut tracker = RoundTracker::new();
    tracker.record("R", "P", None).unwrap();

    let strip = LastMovesStrip::from_tracker(&tracker, 3);
    assert_eq!(strip.title, "Last 3 moves");
    assert_eq!(strip.slots.len(), 3);
    assert_eq!(strip.slots[0], MoveSlot::EMPTY);
    assert_eq!(strip.slots[1], MoveSlot::EMPTY);
    assert_eq!(strip.slots[2].player, Some(Move::Rock));
    assert_eq!(strip.slots[2].opponent, Some(Move::Paper));
}

#[test]
fn test_strip_keeps_most_recent() {
    let mut tracker = RoundTracker::new();
    for p in ["R", "P", "S", "S", "P"] {
        tracker.record(p, "R", None).unwrap();
    }

    let strip = LastMovesStrip::from_tracker(&tracker, 3);
    let players: Vec<Option<Move>> = strip.slots.iter().map(|s| s.player).collect();
    assert_eq!(
        players,
        vec![Some(Move::Scissors), Some(Move::Scissors), Some(Move::Paper)]
    );
}

#[test]
fn test_move_colors() {
    assert_eq!(move_rgb(Some(Move::Rock)), (0xe4, 0x1a, 0x1c));
    assert_eq!(move_rgb(Some(Move::Paper)), (0x37, 0x7e, 0xb8));
    assert_eq!(move_rgb(Some(Move::Scissors)), (0x4d, 0xaf, 0x4a));
    assert_eq!(move_rgb(None), (0xdd, 0xdd, 0xdd));
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let plot = WinRatePlot::from_history(&[1.5]);
    assert_eq!(plot.points, vec![(1.0, 1.0)]);
    assert!(approx(plot.y_min, 0.95));
    assert!(approx(plot.y_max, 1.0));
    assert!(plot.y_min < plot.y_max);
    assert_eq!(plot.annotation.unwrap().text, "100.0%");

    let plot = WinRatePlot::from_history(&[-0.3, 0.2]);
    assert_eq!(plot.points[0], (1.0, 0.0));
    assert!(approx(plot.y_min, 0.0));
    assert!(approx(plot.y_max, 0.25));
}

#[test]
fn test_flat_history_never_collapses_range() {
    for value in [-1.0, 0.0, 0.001, 0.3, 0.5, 0.999, 1.0, 2.0] {
        let plot = WinRatePlot::from_history(&[value, value, value]);
        assert!(
            plot.y_max - plot.y_min >= 0.05 - 1e-12,
            "{value}: [{}, {}]",
            plot.y_min,
            plot.y_max
        );
    }
}

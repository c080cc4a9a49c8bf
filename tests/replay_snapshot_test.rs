//! Tests for scripted replay and session snapshots.

use tictactoe_arena::{Mark, RoundMoves, SessionSnapshot, render_text, replay};

fn rounds(specs: &[&str]) -> Vec<RoundMoves> {
    specs
        .iter()
        .map(|s| s.parse().expect("valid round"))
        .collect()
}

#[test]
fn test_snapshot_history_is_newest_first() {
    // X wins, draw, O wins.
    let engine = replay(&rounds(&["0,3,1,4,2", "0,1,2,3,4,6,5,8,7", "0,4,1,2,8,6"]));
    let snapshot = SessionSnapshot::capture(&engine, 5);

    let games: Vec<usize> = snapshot.history().iter().map(|e| e.game).collect();
    assert_eq!(games, vec![3, 2, 1]);
    assert_eq!(snapshot.scores().x, 1);
    assert_eq!(snapshot.scores().o, 1);
    assert_eq!(snapshot.scores().draws, 1);
    assert_eq!(*snapshot.winner(), Some(Mark::O));
    assert_eq!(*snapshot.winning_line(), Some([2, 4, 6]));
}

#[test]
fn test_snapshot_history_window() {
    let engine = replay(&rounds(&["0,3,1,4,2"; 7]));
    let snapshot = SessionSnapshot::capture(&engine, 5);
    assert_eq!(snapshot.history().len(), 5);
    assert_eq!(*snapshot.total_games(), 7);
    assert_eq!(snapshot.history()[0].game, 7);
}

#[test]
fn test_snapshot_json_round_trip() {
    let engine = replay(&rounds(&["4,0,8"]));
    let snapshot = SessionSnapshot::capture(&engine, 5);
    let json = serde_json::to_string(&snapshot).expect("serializes");
    let back: SessionSnapshot = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, snapshot);
    assert_eq!(*back.next(), Some(Mark::O));
}

#[test]
fn test_render_text_for_draw() {
    let engine = replay(&rounds(&["0,1,2,3,4,6,5,8,7"]));
    let text = render_text(&SessionSnapshot::capture(&engine, 5));
    assert!(text.contains("X|O|X\n-+-+-\nO|X|X\n-+-+-\nO|X|O\n"));
    assert!(text.contains("It's a draw!"));
    assert!(text.contains("Game 1: It's a draw!"));
}

#[test]
fn test_render_text_empty_session() {
    let text = render_text(&SessionSnapshot::capture(&replay(&[]), 5));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("No games played yet"));
}

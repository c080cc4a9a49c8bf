//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: Marks alternate, X first.
///
/// X has placed either as many marks as O or exactly one more, and the mark
/// to move is the one that restores balance.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));

        match engine.to_move() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

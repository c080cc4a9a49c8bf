//! Single winner invariant: play stops at the first completed line.

use super::super::rules::win::holds_line;
use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: At most one mark holds a complete line.
///
/// Placement is refused once a line is complete, so the loser can never
/// complete one of their own afterwards.
pub struct SingleWinnerInvariant;

impl Invariant<GameEngine> for SingleWinnerInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        !(holds_line(board, Mark::X) && holds_line(board, Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark holds a complete line"
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in scan order.
///
/// Rows top-to-bottom, columns left-to-right, then the two diagonals
/// (top-left to bottom-right first).
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and the three positions it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The mark holding the line.
    pub winner: Mark,
    /// The exact line that matched.
    pub line: [Position; 3],
}

impl WinResult {
    /// Board indices of the winning line.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether the given position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WIN_LINES`] order whose three squares hold the
/// same mark. Later lines are not examined once one matches.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinResult> {
    WIN_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinResult { winner: mark, line })
            }
            _ => None,
        }
    })
}

/// Checks whether `mark` holds any complete line, ignoring scan order.
pub(crate) fn holds_line(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
}

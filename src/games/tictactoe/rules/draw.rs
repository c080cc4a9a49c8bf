//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
///
/// A move that fills the last square and completes a line is a win.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    fn fill(board: &mut Board, x: &[usize], o: &[usize]) {
        for &i in x {
            board.set(Position::from_index(i).unwrap(), Square::Occupied(Mark::X));
        }
        for &i in o {
            board.set(Position::from_index(i).unwrap(), Square::Occupied(Mark::O));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        fill(&mut board, &[4], &[]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, &[0, 2, 4, 5, 7], &[1, 3, 6, 8]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, &[0, 1, 2, 5, 6], &[3, 4, 7, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

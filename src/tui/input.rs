//! Key bindings and cursor movement.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::instrument;

/// Direction for the board cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(CursorMove),
    /// Place the current mark under the cursor.
    PlaceAtCursor,
    /// Place the current mark at a specific square.
    Place(Position),
    /// Clear the board, keep score and history.
    NewRound,
    /// Clear board, score and history.
    ResetAll,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action. Releases and unbound keys map to `None`.
#[instrument]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(CursorMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(CursorMove::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(CursorMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(CursorMove::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => Position::from_key(c).map(Action::Place),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ResetAll),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one square, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match direction {
        CursorMove::Up => row.checked_sub(1).map(|r| (r, col)),
        CursorMove::Down => Some((row + 1, col)),
        CursorMove::Left => col.checked_sub(1).map(|c| (row, c)),
        CursorMove::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        let cases = [
            (Position::Center, CursorMove::Up, Position::TopCenter),
            (Position::Center, CursorMove::Left, Position::MiddleLeft),
            (Position::TopLeft, CursorMove::Down, Position::MiddleLeft),
            (Position::BottomCenter, CursorMove::Right, Position::BottomRight),
        ];
        for (from, direction, expected) in cases {
            assert_eq!(move_cursor(from, direction), expected);
        }
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let cases = [
            (Position::TopLeft, CursorMove::Up),
            (Position::TopLeft, CursorMove::Left),
            (Position::MiddleRight, CursorMove::Right),
            (Position::BottomLeft, CursorMove::Down),
        ];
        for (edge, direction) in cases {
            assert_eq!(move_cursor(edge, direction), edge);
        }
    }

    #[test]
    fn test_digit_keys_place_directly() {
        assert_eq!(
            action_for(press(KeyCode::Char('1'))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('9'))),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_command_keys() {
        let cases = [
            (KeyCode::Enter, Action::PlaceAtCursor),
            (KeyCode::Char(' '), Action::PlaceAtCursor),
            (KeyCode::Char('n'), Action::NewRound),
            (KeyCode::Char('R'), Action::ResetAll),
            (KeyCode::Esc, Action::Quit),
        ];
        for (code, action) in cases {
            assert_eq!(action_for(press(code)), Some(action));
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key), None);
    }
}

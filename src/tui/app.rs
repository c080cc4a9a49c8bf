//! Application state and logic.

use crate::games::tictactoe::{GameEngine, Placement, Position};
use crossterm::event::KeyEvent;
use tracing::{debug, info, instrument};

use super::input::{Action, action_for, move_cursor};

/// Main application state: the engine plus view-only cursor state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    history_limit: usize,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh session.
    pub fn new(history_limit: usize) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            history_limit,
            should_quit: false,
        }
    }

    /// Gets the session engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Number of history rows to display.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Decodes and applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match action_for(key) {
            Some(action) => self.apply(action),
            None => debug!(?key, "Unbound key"),
        }
    }

    /// Applies one action: at most one engine transition.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::NewRound => self.engine.reset_round(),
            Action::ResetAll => self.engine.reset_session(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        if let Placement::Decided(outcome) = self.engine.place_at(pos) {
            info!(%outcome, "Round over");
        }
    }
}

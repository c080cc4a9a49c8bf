//! Session engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board, the turn, the scoreboard and the history.
//! It is mutated only through [`GameEngine::place_mark`],
//! [`GameEngine::reset_round`] and [`GameEngine::reset_session`]; the round
//! status is always re-derived from the board.

use super::history::History;
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::{GameStatus, Outcome};
use super::position::Position;
use super::rules::{self, WinResult};
use super::scoreboard::Scoreboard;
use super::types::{Board, Mark, Square};
use tracing::{debug, info, instrument};

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The index does not name a square.
    #[display("Index {} is off the board", _0)]
    OutOfRange(usize),

    /// The round already has an outcome.
    #[display("Round is already decided")]
    RoundDecided,

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// What a call to [`GameEngine::place_mark`] did.
///
/// Informational only: ignored placements are normal gameplay, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was placed and the round continues.
    Continued,
    /// The mark was placed and decided the round.
    Decided(Outcome),
    /// Nothing changed.
    Ignored(Rejection),
}

/// Board, turn, scoreboard and history of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) history: History,
}

impl GameEngine {
    /// Starts a new session: empty board, X to move, no score, no history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            scoreboard: Scoreboard::new(),
            history: History::new(),
        }
    }

    /// Places the current mark at `index` (0-8, row-major).
    ///
    /// Out-of-range indices, occupied squares and decided rounds are ignored
    /// without touching any state. When the placement decides the round, the
    /// scoreboard and history are updated exactly once.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place_mark(&mut self, index: usize) -> Placement {
        let Some(pos) = Position::from_index(index) else {
            return self.ignore(Rejection::OutOfRange(index));
        };

        if self.is_decided() {
            return self.ignore(Rejection::RoundDecided);
        }

        if !self.board.is_empty(pos) {
            return self.ignore(Rejection::Occupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();

        let placement = match self.current_status().outcome() {
            Some(outcome) => {
                self.scoreboard.record(outcome);
                self.history.push(outcome);
                info!(%outcome, games = self.history.len(), "Round decided");
                Placement::Decided(outcome)
            }
            None => Placement::Continued,
        };

        self.assert_invariants();
        placement
    }

    /// Places the current mark at a named position.
    pub fn place_at(&mut self, pos: Position) -> Placement {
        self.place_mark(pos.to_index())
    }

    /// Clears the board and gives X the first move. Score and history stay.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
        info!("Round reset");
        self.assert_invariants();
    }

    /// Resets the round, then zeroes the scoreboard and clears the history.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        self.reset_round();
        self.scoreboard = Scoreboard::new();
        self.history = History::new();
        info!("Session reset");
        self.assert_invariants();
    }

    /// Status of the current round, recomputed from the board.
    pub fn current_status(&self) -> GameStatus {
        if let Some(result) = rules::check_winner(&self.board) {
            GameStatus::Won(result)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next: self.to_move }
        }
    }

    /// The winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinResult> {
        rules::check_winner(&self.board)
    }

    /// Whether the current round has an outcome.
    pub fn is_decided(&self) -> bool {
        self.current_status().is_decided()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the session scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the session history.
    pub fn history(&self) -> &History {
        &self.history
    }

    fn ignore(&self, rejection: Rejection) -> Placement {
        debug!(%rejection, "Placement ignored");
        Placement::Ignored(rejection)
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            panic!("Engine invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

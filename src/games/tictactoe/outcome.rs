//! Round outcomes and the derived round status.

use super::rules::WinResult;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner(Mark),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Status of the current round, derived from the board and turn.
///
/// Never stored; see [`GameEngine::current_status`](super::GameEngine::current_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A mark completed a line.
    Won(WinResult),
    /// The board is full with no line completed.
    Draw,
    /// The round continues.
    InProgress {
        /// Mark to move next.
        next: Mark,
    },
}

impl GameStatus {
    /// Whether the round has an outcome.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The outcome, if the round is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::Won(result) => Some(Outcome::Winner(result.winner)),
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::InProgress { .. } => None,
        }
    }

    /// The winning line, if any.
    pub fn win(&self) -> Option<&WinResult> {
        match self {
            GameStatus::Won(result) => Some(result),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(result) => write!(f, "Winner: {}", result.winner),
            GameStatus::Draw => write!(f, "It's a draw!"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

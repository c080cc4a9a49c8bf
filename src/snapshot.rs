//! Serializable read model of a session.

use crate::games::tictactoe::{GameEngine, GameStatus, HistoryEntry, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Counters as shown on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
    /// Rounds drawn.
    pub draws: u32,
}

/// Point-in-time view of an engine, shaped for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Squares in row-major order; `None` for empty.
    board: Vec<Option<Mark>>,
    /// Status line, e.g. `Next player: X`.
    status: String,
    /// Mark to move, absent once the round is decided.
    next: Option<Mark>,
    /// Winner of the current round, if any.
    winner: Option<Mark>,
    /// Indices of the winning line, if any.
    winning_line: Option<[usize; 3]>,
    /// Session scoreboard.
    scores: Scores,
    /// Most recent history entries, newest first.
    history: Vec<HistoryEntry>,
    /// Rounds completed this session.
    total_games: usize,
}

impl SessionSnapshot {
    /// Captures the engine, keeping at most `history_limit` history entries.
    #[instrument(skip(engine))]
    pub fn capture(engine: &GameEngine, history_limit: usize) -> Self {
        let status = engine.current_status();
        let win = status.win().copied();
        let scoreboard = engine.scoreboard();

        Self {
            board: engine.board().squares().iter().map(|s| s.mark()).collect(),
            status: status.to_string(),
            next: match status {
                GameStatus::InProgress { next } => Some(next),
                _ => None,
            },
            winner: win.map(|w| w.winner),
            winning_line: win.map(|w| w.indices()),
            scores: Scores {
                x: *scoreboard.x(),
                o: *scoreboard.o(),
                draws: *scoreboard.draws(),
            },
            history: engine.history().recent(history_limit).collect(),
            total_games: engine.history().len(),
        }
    }
}

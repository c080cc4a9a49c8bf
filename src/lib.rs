//! Tic-tac-toe Arena library - a two-player session with scoreboard and history
//!
//! One [`GameEngine`] owns the board, the turn, the scoreboard and the
//! history of a session. The terminal UI and the scripted replay driver are
//! thin layers over it.
//!
//! # Architecture
//!
//! - **Games**: tic-tac-toe engine, rules and invariants
//! - **Snapshot**: serializable read model of a session
//! - **Replay**: scripted, non-interactive play
//! - **TUI**: ratatui front end
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::{GameEngine, GameStatus, Mark, Outcome, Placement};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.place_mark(index);
//! }
//! assert_eq!(engine.place_mark(2), Placement::Decided(Outcome::Winner(Mark::X)));
//! assert!(matches!(engine.current_status(), GameStatus::Won(_)));
//! assert_eq!(*engine.scoreboard().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod snapshot;
mod tui;

// Crate-level exports - Configuration
pub use config::{ArenaConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameStatus, History, HistoryEntry, Mark, Outcome, Placement, Position,
    Rejection, Scoreboard, Square, WIN_LINES, WinResult, check_winner, is_draw, is_full,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    ScoreMatchesHistoryInvariant, SingleWinnerInvariant,
};

// Crate-level exports - Replay and snapshots
pub use replay::{RoundMoves, RoundParseError, render_text, replay};
pub use snapshot::{Scores, SessionSnapshot};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, CursorMove, action_for, draw, move_cursor, run_tui};

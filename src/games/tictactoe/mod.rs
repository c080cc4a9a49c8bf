mod engine;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod scoreboard;
mod types;

pub use engine::{GameEngine, Placement, Rejection};
pub use history::{History, HistoryEntry};
pub use outcome::{GameStatus, Outcome};
pub use position::Position;
pub use rules::{WIN_LINES, WinResult, check_winner, is_draw, is_full};
pub use scoreboard::Scoreboard;
pub use types::{Board, Mark, Square};

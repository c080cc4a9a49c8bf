//! Scripted, non-interactive play.
//!
//! Each round is a list of cell indices fed to [`GameEngine::place_mark`]
//! in order, with a round reset between rounds. Illegal moves are ignored
//! exactly as they are in the terminal UI.

use crate::games::tictactoe::{GameEngine, Placement};
use crate::snapshot::SessionSnapshot;
use derive_more::{Display, Error};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Moves of one scripted round, parsed from `"0,3,1,4,2"`.
///
/// A blank string is a round with no moves. Empty entries such as `"0,,3"`
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundMoves(pub Vec<usize>);

impl FromStr for RoundMoves {
    type Err = RoundParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(RoundMoves(Vec::new()));
        }

        s.split(',')
            .map(str::trim)
            .map(|token| {
                token.parse::<usize>().map_err(|e| {
                    RoundParseError::new(format!("Invalid cell index {:?}: {}", token, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RoundMoves)
    }
}

/// Error parsing a scripted round.
#[derive(Debug, Clone, Display, Error)]
#[display("Round parse error: {} at {}:{}", message, file, line)]
pub struct RoundParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RoundParseError {
    /// Creates a new parse error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Plays every round through a fresh engine and returns it.
#[instrument(skip(rounds), fields(rounds = rounds.len()))]
pub fn replay(rounds: &[RoundMoves]) -> GameEngine {
    let mut engine = GameEngine::new();

    for (round, RoundMoves(moves)) in rounds.iter().enumerate() {
        if round > 0 {
            engine.reset_round();
        }
        for &index in moves {
            if let Placement::Ignored(rejection) = engine.place_mark(index) {
                debug!(round, index, %rejection, "Scripted move ignored");
            }
        }
    }

    info!(games = engine.history().len(), "Replay finished");
    engine
}

/// Plain-text report of a snapshot: board, status, scores and history.
pub fn render_text(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    for (row, cells) in snapshot.board().chunks(3).enumerate() {
        if row > 0 {
            out.push_str("-+-+-\n");
        }
        let line = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| match cell {
                Some(mark) => mark.to_string(),
                None => (row * 3 + col + 1).to_string(),
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&line);
        out.push('\n');
    }

    let scores = snapshot.scores();
    let _ = writeln!(out, "\n{}", snapshot.status());
    let _ = writeln!(
        out,
        "Player X: {}  Player O: {}  Draws: {}",
        scores.x, scores.o, scores.draws
    );

    if snapshot.history().is_empty() {
        out.push_str("No games played yet\n");
    } else {
        for entry in snapshot.history() {
            let _ = writeln!(out, "{}", entry);
        }
    }
    out
}

//! Append-only log of round outcomes.

use super::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// Outcomes of completed rounds, in completion order.
///
/// Storage is unbounded; display code asks for a window with [`History::recent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    outcomes: Vec<Outcome>,
}

/// One history row as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based game number in completion order.
    pub game: usize,
    /// How that game ended.
    pub result: Outcome,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}: {}", self.game, self.result)
    }
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Number of completed rounds.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no round has completed.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// All outcomes, oldest first.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// The last `limit` entries, most recent first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .rev()
            .take(limit)
            .map(|(index, outcome)| HistoryEntry {
                game: index + 1,
                result: *outcome,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_recent_is_most_recent_first_and_capped() {
        let mut history = History::new();
        for i in 0..7 {
            let outcome = if i % 2 == 0 {
                Outcome::Winner(Mark::X)
            } else {
                Outcome::Draw
            };
            history.push(outcome);
        }

        let games: Vec<usize> = history.recent(5).map(|e| e.game).collect();
        assert_eq!(games, vec![7, 6, 5, 4, 3]);
        assert_eq!(history.len(), 7);
    }

    #[test]
    fn test_entry_label() {
        let mut history = History::new();
        history.push(Outcome::Winner(Mark::O));
        let entry = history.recent(5).next().expect("one entry");
        assert_eq!(entry.to_string(), "Game 1: O wins!");
    }

    #[test]
    fn test_recent_on_empty_history() {
        assert_eq!(History::new().recent(5).count(), 0);
    }
}

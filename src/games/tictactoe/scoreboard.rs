//! Cumulative score across the rounds of a session.

use super::outcome::Outcome;
use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Win and draw counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds drawn.
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Total rounds recorded.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Counts one completed round.
    #[instrument]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Winner(Mark::X) => &mut self.x,
            Outcome::Winner(Mark::O) => &mut self.o,
            Outcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_one_counter() {
        let mut scores = Scoreboard::new();
        scores.record(Outcome::Winner(Mark::O));
        assert_eq!(*scores.o(), 1);
        assert_eq!(*scores.x(), 0);
        assert_eq!(*scores.draws(), 0);

        scores.record(Outcome::Draw);
        scores.record(Outcome::Winner(Mark::X));
        assert_eq!(scores.wins(Mark::X), 1);
        assert_eq!(scores.total(), 3);
    }
}

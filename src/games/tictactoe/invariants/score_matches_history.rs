//! Score/history consistency: every recorded outcome is counted once.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: Scoreboard counters equal the outcome counts in history.
pub struct ScoreMatchesHistoryInvariant;

impl Invariant<GameEngine> for ScoreMatchesHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let outcomes = engine.history().outcomes();
        let wins = |mark: Mark| {
            outcomes
                .iter()
                .filter(|o| o.winner() == Some(mark))
                .count()
        };
        let draws = outcomes.iter().filter(|o| o.is_draw()).count();
        let scores = engine.scoreboard();

        wins(Mark::X) == *scores.x() as usize
            && wins(Mark::O) == *scores.o() as usize
            && draws == *scores.draws() as usize
    }

    fn description() -> &'static str {
        "Scoreboard matches the outcomes recorded in history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Outcome;

    #[test]
    fn test_holds_after_completed_round() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.place_mark(index);
        }
        assert!(ScoreMatchesHistoryInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_unrecorded_score_violates() {
        let mut engine = GameEngine::new();
        engine.scoreboard.record(Outcome::Winner(Mark::O));
        assert!(!ScoreMatchesHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_unscored_history_violates() {
        let mut engine = GameEngine::new();
        engine.history.push(Outcome::Draw);
        assert!(!ScoreMatchesHistoryInvariant::holds(&engine));
    }
}

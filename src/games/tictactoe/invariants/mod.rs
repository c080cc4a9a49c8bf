//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every engine
//! transition. They are testable independently and are asserted by the
//! engine in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants; every member is checked and all
/// violations are reported.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod score_matches_history;
pub mod single_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use score_matches_history::ScoreMatchesHistoryInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    AlternatingTurnInvariant,
    ScoreMatchesHistoryInvariant,
    SingleWinnerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameEngine, Mark, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2] {
            engine.place_mark(index);
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.place_mark(4);
        // Extra X plus a phantom O win nobody scored.
        engine.board.set(Position::TopLeft, Square::Occupied(Mark::X));
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            engine.board.set(pos, Square::Occupied(Mark::O));
        }
        engine.scoreboard.record(crate::games::tictactoe::Outcome::Draw);

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AlternatingTurnInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&GameEngine::new()).is_ok());
    }
}

//! First-class invariants for a game.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and are asserted after every play in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];
        let violations: Vec<InvariantViolation> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod board_history;
pub mod pawn_supply;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_history::BoardMatchesHistoryInvariant;
pub use pawn_supply::PawnSupplyInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    PawnSupplyInvariant,
    BoardMatchesHistoryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Side};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_plays() {
        let mut game = Game::new(6).unwrap();
        for (col, row) in [(0, 0), (5, 5), (2, 3), (3, 2)] {
            game.play(col, row).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::default();
        game.play(1, 1).unwrap();

        // Corrupt the board
        game.board.place(4, 4, Side::Light.encode()).unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            BoardMatchesHistoryInvariant::description()
        );
    }
}

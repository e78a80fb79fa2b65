//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} play {Q}`. Preconditions are checked on every play before anything
//! is mutated; postconditions are checked in debug builds.

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{Game, GameError, GameResult, Location};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> GameResult<()>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target hole is on the board.
pub struct OnTheBoard;

impl OnTheBoard {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(to: &Location, game: &Game) -> GameResult<()> {
        if game.board().in_bounds(to.col, to.row) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                col: to.col,
                row: to.row,
            })
        }
    }
}

/// Precondition: the target hole holds no pawn.
pub struct HoleIsEmpty;

impl HoleIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(to: &Location, game: &Game) -> GameResult<()> {
        if game.board().is_empty(to.col, to.row)? {
            Ok(())
        } else {
            Err(GameError::CellOccupied {
                col: to.col,
                row: to.row,
            })
        }
    }
}

/// Precondition: the side to move still has a pawn.
pub struct HasPawns;

impl HasPawns {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> GameResult<()> {
        let side = game.current_side();
        if game.pawns_remaining(side) == 0 {
            Err(GameError::NoPawnsLeft { side })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a play is legal if the hole is on the board and
/// empty and the side to move has a pawn. Checked in that order.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(game))]
    pub fn check(to: &Location, game: &Game) -> GameResult<()> {
        OnTheBoard::check(to, game)?;
        HoleIsEmpty::check(to, game)?;
        HasPawns::check(game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for plays.
///
/// Preconditions:
/// - Hole is on the board
/// - Hole is empty
/// - Side to move has a pawn
///
/// Postconditions:
/// - Exactly one hole changed, and the history grew by one move
/// - All game invariants hold
pub struct PlayContract;

impl Contract<Game, Location> for PlayContract {
    fn pre(game: &Game, to: &Location) -> GameResult<()> {
        LegalPlay::check(to, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(a, b)| a != b)
            .count();
        if changed != 1 {
            warn!(changed, "Play changed an unexpected number of holes");
            violations.push(InvariantViolation::new(format!(
                "A play changes exactly one hole (changed {changed})"
            )));
        }

        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "A play appends exactly one move to the history",
            ));
        }

        if let Err(mut found) = GameInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Side, TurnEngine};

    #[test]
    fn test_precondition_empty_hole() {
        let game = Game::default();
        assert!(PlayContract::pre(&game, &Location::new(3, 3)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_hole() {
        let mut game = Game::default();
        game.play(3, 3).unwrap();
        assert_eq!(
            PlayContract::pre(&game, &Location::new(3, 3)),
            Err(GameError::CellOccupied { col: 3, row: 3 })
        );
    }

    #[test]
    fn test_precondition_off_the_board() {
        let game = Game::new(5).unwrap();
        assert_eq!(
            PlayContract::pre(&game, &Location::new(5, 0)),
            Err(GameError::OutOfBounds { col: 5, row: 0 })
        );
    }

    #[test]
    fn test_precondition_order() {
        // Occupancy is reported before an empty supply
        let turns = TurnEngine::with_supply(1, Side::Light).unwrap();
        let mut game = Game::with_turns(3, turns).unwrap();
        game.play(0, 0).unwrap();
        game.play(1, 0).unwrap();
        assert_eq!(
            LegalPlay::check(&Location::new(0, 0), &game),
            Err(GameError::CellOccupied { col: 0, row: 0 })
        );
        assert_eq!(
            LegalPlay::check(&Location::new(2, 2), &game),
            Err(GameError::NoPawnsLeft { side: Side::Light })
        );
    }

    #[test]
    fn test_postcondition_holds_after_play() {
        let before = Game::default();
        let mut after = before.clone();
        after.play(0, 0).unwrap();
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_extra_hole() {
        let before = Game::default();
        let mut after = before.clone();
        after.play(0, 0).unwrap();

        // Corrupt the board behind the game's back
        after.board.place(5, 5, Side::Dark.encode()).unwrap();

        let violations = PlayContract::post(&before, &after).unwrap_err();
        assert!(!violations.is_empty());
    }
}

//! Alternating turn invariant: sides alternate, starting with the first side.

use super::Invariant;
use crate::Game;

/// Invariant: sides alternate turns.
///
/// The history starts with the configured first side, never has the same
/// side twice in a row, and the side to move follows from its length.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.turns().first_side();
        let history = game.history();

        if history.first().is_some_and(|m| m.side != first) {
            return false;
        }

        if history.windows(2).any(|w| w[0].side == w[1].side) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.current_side() == expected_next
    }

    fn description() -> &'static str {
        "Sides alternate turns, starting with the first side"
    }
}

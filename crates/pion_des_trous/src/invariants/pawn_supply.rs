//! Pawn supply invariant: every pawn a side spent is on the record.

use super::Invariant;
use crate::{Game, Side};

/// Invariant: for each side, pawns spent equal that side's moves.
///
/// `supply - pawns_remaining(side)` must match the number of moves the side
/// has in the history, so a side's supply never moves on the other side's
/// turn.
pub struct PawnSupplyInvariant;

impl Invariant<Game> for PawnSupplyInvariant {
    fn holds(game: &Game) -> bool {
        let supply = game.turns().supply();
        Side::PLAYERS.iter().all(|&side| {
            let spent = game.history().iter().filter(|m| m.side == side).count();
            let remaining = game.pawns_remaining(side);
            remaining <= supply && (supply - remaining) as usize == spent
        })
    }

    fn description() -> &'static str {
        "Pawns spent by each side equal its moves"
    }
}

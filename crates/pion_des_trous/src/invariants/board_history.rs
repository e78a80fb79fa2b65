//! Board/history invariant: the board holds exactly the recorded moves.

use super::Invariant;
use crate::Game;

/// Invariant: every recorded move is on the board, and nothing else is.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<Game> for BoardMatchesHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        if board.occupied() != game.history().len() {
            return false;
        }

        game.history().iter().all(|m| {
            board
                .piece_at(m.to.col, m.to.row)
                .is_ok_and(|piece| piece == m.side.encode())
        })
    }

    fn description() -> &'static str {
        "Board holds exactly the pawns in the move history"
    }
}

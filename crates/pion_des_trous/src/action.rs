//! First-class record of a placement.

use crate::{Location, Side};
use serde::{Deserialize, Serialize};

/// A pawn placed by a side into a hole.
///
/// [`crate::Game::play`] returns the move it applied and keeps every move in
/// the game history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The side that played.
    pub side: Side,
    /// The hole the pawn went into.
    pub to: Location,
}

impl Move {
    /// Returns the side that played.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the target hole.
    pub fn to(&self) -> Location {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.to)
    }
}

//! Sides and the piece codec.

use crate::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Raw value stored in a board cell.
pub type Piece = u8;

/// The value of a hole with no pawn in it.
pub const EMPTY: Piece = 0;

/// One of the two opponents, or the "no side" sentinel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// No side (an empty hole).
    None,
    /// The light side (moves first by default).
    Light,
    /// The dark side.
    Dark,
}

impl Side {
    /// The two playing sides, in default turn order.
    pub const PLAYERS: [Side; 2] = [Side::Light, Side::Dark];

    /// Returns the opposing side. The sentinel has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Side::None => Side::None,
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Returns the piece this side leaves in a hole.
    pub fn encode(self) -> Piece {
        match self {
            Side::None => EMPTY,
            Side::Light => 1,
            Side::Dark => 2,
        }
    }

    /// Decodes a stored piece.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPieceEncoding`] for any value other than
    /// 0, 1 or 2.
    #[instrument]
    pub fn decode(value: Piece) -> GameResult<Self> {
        match value {
            EMPTY => Ok(Side::None),
            1 => Ok(Side::Light),
            2 => Ok(Side::Dark),
            value => Err(GameError::InvalidPieceEncoding { value }),
        }
    }

    /// Returns true for `Light` and `Dark`.
    pub fn is_player(self) -> bool {
        self != Side::None
    }
}

impl From<Side> for Piece {
    fn from(side: Side) -> Self {
        side.encode()
    }
}

impl TryFrom<Piece> for Side {
    type Error = GameError;

    fn try_from(value: Piece) -> Result<Self, Self::Error> {
        Side::decode(value)
    }
}

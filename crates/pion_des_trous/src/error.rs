//! Error taxonomy for the game core.

use crate::Side;

/// Error that can occur when building or playing a game.
///
/// Every variant is local and recoverable: a rejected operation leaves the
/// game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A board dimension was zero.
    #[display("Board dimensions must be positive, got {columns}x{rows}")]
    InvalidDimension {
        /// Requested number of columns.
        columns: usize,
        /// Requested number of rows.
        rows: usize,
    },

    /// Stored cells do not fill the board's dimensions.
    #[display("Board expects {expected} cells, got {found}")]
    CellCountMismatch {
        /// Cells the dimensions call for.
        expected: usize,
        /// Cells actually provided.
        found: usize,
    },

    /// The location is off the board.
    #[display("Location ({col}, {row}) is off the board")]
    OutOfBounds {
        /// Column of the rejected location.
        col: usize,
        /// Row of the rejected location.
        row: usize,
    },

    /// The empty sentinel cannot be placed as a piece.
    #[display("Cannot place an empty piece")]
    InvalidPiece,

    /// Nothing to remove at the location.
    #[display("Hole ({col}, {row}) is already empty")]
    EmptyCell {
        /// Column of the empty hole.
        col: usize,
        /// Row of the empty hole.
        row: usize,
    },

    /// The hole already holds a pawn.
    #[display("Hole ({col}, {row}) is already taken")]
    CellOccupied {
        /// Column of the occupied hole.
        col: usize,
        /// Row of the occupied hole.
        row: usize,
    },

    /// The side has used up its pawn supply.
    #[display("{side} has no pawns left")]
    NoPawnsLeft {
        /// The side whose supply is exhausted.
        side: Side,
    },

    /// The side tried to play out of turn.
    #[display("It's not {side}'s turn")]
    NotYourTurn {
        /// The side that tried to play.
        side: Side,
    },

    /// A side has more pawns left than it started with.
    #[display("{side} has {remaining} pawns left out of a supply of {supply}")]
    SupplyExceeded {
        /// The side with the impossible count.
        side: Side,
        /// Pawns it claims to have left.
        remaining: u32,
        /// Pawns each side started with.
        supply: u32,
    },

    /// A playing side was required but the sentinel was given.
    #[display("A playing side (Light or Dark) is required")]
    InvalidSide,

    /// A stored value does not encode any side.
    #[display("Value {value} does not encode a piece")]
    InvalidPieceEncoding {
        /// The unrecognized value.
        value: u8,
    },
}

impl std::error::Error for GameError {}

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;

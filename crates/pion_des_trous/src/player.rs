//! Pawn supplies and turn rotation.

use crate::{GameError, GameResult, Piece, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of pawns each side starts with.
pub const DEFAULT_PAWN_SUPPLY: u32 = 42;

/// Side that moves first unless configured otherwise.
pub const DEFAULT_FIRST_SIDE: Side = Side::Light;

/// One side and the pawns it has left to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPlayer")]
pub struct Player {
    side: Side,
    pawns_remaining: u32,
}

impl Player {
    /// Creates a player with a full supply.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSide`] for [`Side::None`].
    pub fn new(side: Side, supply: u32) -> GameResult<Self> {
        if !side.is_player() {
            return Err(GameError::InvalidSide);
        }
        Ok(Self {
            side,
            pawns_remaining: supply,
        })
    }

    /// The side this player plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Pawns this player can still place.
    pub fn pawns_remaining(&self) -> u32 {
        self.pawns_remaining
    }

    /// Takes one pawn from the supply and returns its piece.
    fn play(&mut self) -> GameResult<Piece> {
        if self.pawns_remaining == 0 {
            return Err(GameError::NoPawnsLeft { side: self.side });
        }
        self.pawns_remaining -= 1;
        Ok(self.side.encode())
    }
}

#[derive(Deserialize)]
struct StoredPlayer {
    side: Side,
    pawns_remaining: u32,
}

impl TryFrom<StoredPlayer> for Player {
    type Error = GameError;

    fn try_from(stored: StoredPlayer) -> GameResult<Self> {
        Player::new(stored.side, stored.pawns_remaining)
    }
}

/// Per-side pawn supplies plus the side to move.
///
/// The side to move is always `Light` or `Dark` and only changes through
/// [`TurnEngine::consume_and_advance`]. Deserialization enforces the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTurnEngine")]
pub struct TurnEngine {
    light: Player,
    dark: Player,
    side_to_move: Side,
    first_side: Side,
    supply: u32,
}

impl TurnEngine {
    /// Creates a turn engine with the default supply and `Light` to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            light: Player {
                side: Side::Light,
                pawns_remaining: DEFAULT_PAWN_SUPPLY,
            },
            dark: Player {
                side: Side::Dark,
                pawns_remaining: DEFAULT_PAWN_SUPPLY,
            },
            side_to_move: DEFAULT_FIRST_SIDE,
            first_side: DEFAULT_FIRST_SIDE,
            supply: DEFAULT_PAWN_SUPPLY,
        }
    }

    /// Creates a turn engine with a custom supply and first side.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSide`] if `first` is [`Side::None`].
    #[instrument]
    pub fn with_supply(supply: u32, first: Side) -> GameResult<Self> {
        if !first.is_player() {
            return Err(GameError::InvalidSide);
        }
        Ok(Self {
            light: Player::new(Side::Light, supply)?,
            dark: Player::new(Side::Dark, supply)?,
            side_to_move: first,
            first_side: first,
            supply,
        })
    }

    /// The side whose turn it is.
    pub fn current_side(&self) -> Side {
        self.side_to_move
    }

    /// The side that moved first.
    pub fn first_side(&self) -> Side {
        self.first_side
    }

    /// The supply each side started with.
    pub fn supply(&self) -> u32 {
        self.supply
    }

    /// Returns the player for a side, or `None` for the sentinel.
    pub fn player(&self, side: Side) -> Option<&Player> {
        match side {
            Side::Light => Some(&self.light),
            Side::Dark => Some(&self.dark),
            Side::None => None,
        }
    }

    fn player_mut(&mut self, side: Side) -> Option<&mut Player> {
        match side {
            Side::Light => Some(&mut self.light),
            Side::Dark => Some(&mut self.dark),
            Side::None => None,
        }
    }

    /// Pawns left for a side. The sentinel has none.
    pub fn pawns_remaining(&self, side: Side) -> u32 {
        self.player(side).map_or(0, Player::pawns_remaining)
    }

    /// Returns true if the side to move cannot place any more pawns.
    pub fn is_exhausted(&self) -> bool {
        self.pawns_remaining(self.side_to_move) == 0
    }

    /// Spends one of `side`'s pawns and passes the turn.
    ///
    /// Returns the piece to put on the board.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotYourTurn`] if `side` is the sentinel.
    /// - [`GameError::NoPawnsLeft`] if `side` has no pawns left.
    /// - [`GameError::NotYourTurn`] if it is the other side's turn.
    #[instrument(skip(self), fields(to_move = %self.side_to_move))]
    pub fn consume_and_advance(&mut self, side: Side) -> GameResult<Piece> {
        let to_move = self.side_to_move;
        let player = self
            .player_mut(side)
            .ok_or(GameError::NotYourTurn { side })?;
        if player.pawns_remaining() == 0 {
            return Err(GameError::NoPawnsLeft { side });
        }
        if side != to_move {
            return Err(GameError::NotYourTurn { side });
        }

        let piece = player.play()?;
        let remaining = player.pawns_remaining();
        self.side_to_move = side.opponent();
        debug!(%side, remaining, next = %self.side_to_move, "Pawn consumed");
        Ok(piece)
    }
}

#[derive(Deserialize)]
struct StoredTurnEngine {
    light: Player,
    dark: Player,
    side_to_move: Side,
    first_side: Side,
    supply: u32,
}

impl TryFrom<StoredTurnEngine> for TurnEngine {
    type Error = GameError;

    fn try_from(stored: StoredTurnEngine) -> GameResult<Self> {
        if stored.light.side != Side::Light
            || stored.dark.side != Side::Dark
            || !stored.side_to_move.is_player()
            || !stored.first_side.is_player()
        {
            return Err(GameError::InvalidSide);
        }
        for player in [stored.light, stored.dark] {
            if player.pawns_remaining > stored.supply {
                return Err(GameError::SupplyExceeded {
                    side: player.side,
                    remaining: player.pawns_remaining,
                    supply: stored.supply,
                });
            }
        }
        Ok(Self {
            light: stored.light,
            dark: stored.dark,
            side_to_move: stored.side_to_move,
            first_side: stored.first_side,
            supply: stored.supply,
        })
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! The game façade: one board, one turn engine, one history.

use crate::config::GameConfig;
use crate::contracts::{Contract, PlayContract};
use crate::pointer::{PointerMapper, PointerTarget};
use crate::{Board, GameResult, Location, Move, Piece, Side, TurnEngine};
use tracing::{debug, instrument, warn};

/// A game of Le pion des trous.
///
/// [`Game::play`] is the only way to change the state. It validates the whole
/// play before touching anything, so a rejected play leaves the board, the
/// supplies and the side to move exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turns: TurnEngine,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game on a square board with default supplies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::InvalidDimension`] if `board_size` is zero.
    #[instrument]
    pub fn new(board_size: usize) -> GameResult<Self> {
        Self::with_turns(board_size, TurnEngine::new())
    }

    /// Creates a game on a square board with a prepared turn engine.
    #[instrument(skip(turns))]
    pub fn with_turns(board_size: usize, turns: TurnEngine) -> GameResult<Self> {
        Ok(Self {
            board: Board::square(board_size)?,
            turns,
            history: Vec::new(),
        })
    }

    /// Creates a game from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        let turns = TurnEngine::with_supply(*config.pawn_supply(), *config.first_side())?;
        Self::with_turns(*config.board_size(), turns)
    }

    /// Holes per side of the board.
    pub fn board_size(&self) -> usize {
        self.board.columns()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn engine.
    pub fn turns(&self) -> &TurnEngine {
        &self.turns
    }

    /// Returns every successful play, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once a play has succeeded.
    pub fn started(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns true if the hole holds no pawn.
    pub fn is_empty(&self, col: usize, row: usize) -> GameResult<bool> {
        self.board.is_empty(col, row)
    }

    /// Returns the raw piece in the hole.
    pub fn piece_at(&self, col: usize, row: usize) -> GameResult<Piece> {
        self.board.piece_at(col, row)
    }

    /// Returns the side whose pawn is in the hole, [`Side::None`] if empty.
    pub fn opponent_at(&self, col: usize, row: usize) -> GameResult<Side> {
        Side::decode(self.board.piece_at(col, row)?)
    }

    /// The side whose turn it is.
    pub fn current_side(&self) -> Side {
        self.turns.current_side()
    }

    /// Pawns left for a side.
    pub fn pawns_remaining(&self, side: Side) -> u32 {
        self.turns.pawns_remaining(side)
    }

    /// Returns true if the side to move has no pawns left.
    pub fn is_exhausted(&self) -> bool {
        self.turns.is_exhausted()
    }

    /// Places a pawn of the side to move into the hole and passes the turn.
    ///
    /// # Errors
    ///
    /// Checked in this order, before any mutation:
    /// - [`crate::GameError::OutOfBounds`] if the hole is off the board.
    /// - [`crate::GameError::CellOccupied`] if the hole holds a pawn.
    /// - [`crate::GameError::NoPawnsLeft`] if the side to move has none left.
    #[instrument(skip(self), fields(side = %self.turns.current_side()))]
    pub fn play(&mut self, col: usize, row: usize) -> GameResult<Move> {
        let to = Location::new(col, row);
        if let Err(e) = PlayContract::pre(self, &to) {
            warn!(error = %e, "Play rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let side = self.turns.current_side();
        let piece = self.turns.consume_and_advance(side)?;
        self.board.place(col, row, piece)?;
        let played = Move::new(side, to);
        self.history.push(played);
        debug!(%played, remaining = self.turns.pawns_remaining(side), "Pawn placed");

        #[cfg(debug_assertions)]
        {
            let post = PlayContract::post(&before, self);
            debug_assert!(post.is_ok(), "Play postcondition violated: {:?}", post);
        }

        Ok(played)
    }

    /// Hit-tests a pointer position against this game's board.
    pub fn locate(&self, mapper: &PointerMapper, x: f64, y: f64) -> PointerTarget {
        mapper.classify(&self.board, x, y)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::default(),
            turns: TurnEngine::new(),
            history: Vec::new(),
        }
    }
}

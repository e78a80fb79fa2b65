//! Le pion des trous - pure game logic.
//!
//! Two sides take turns dropping pawns from a fixed supply into the empty
//! holes of a square board.
//!
//! # Architecture
//!
//! - **Board**: grid of holes, bounds and occupancy
//! - **Side**: `Light`, `Dark` and the empty sentinel, with the piece codec
//! - **TurnEngine**: pawn supplies and the side to move
//! - **Game**: the façade; [`Game::play`] is the only mutating operation
//! - **Pointer**: screen position → hole hit-testing and hover debounce
//!
//! # Example
//!
//! ```
//! use pion_des_trous::{Game, PointerMapper, PointerTarget, Side};
//!
//! let mut game = Game::default();
//! let mapper = PointerMapper::new(20.0);
//!
//! if let PointerTarget::Hole(loc) = game.locate(&mapper, 40.0, 40.0) {
//!     game.play(loc.col, loc.row).unwrap();
//! }
//! assert_eq!(game.opponent_at(0, 0).unwrap(), Side::Light);
//! assert_eq!(game.current_side(), Side::Dark);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod error;
mod game;
mod player;
mod pointer;
mod side;

pub mod contracts;
pub mod invariants;

pub use action::Move;
pub use board::{Board, Location};
pub use config::{ConfigError, DEFAULT_BOARD_SIZE, GameConfig};
pub use error::{GameError, GameResult};
pub use game::Game;
pub use player::{DEFAULT_FIRST_SIDE, DEFAULT_PAWN_SUPPLY, Player, TurnEngine};
pub use pointer::{HoverState, HoverTracker, PointerMapper, PointerTarget, classify, grid_location};
pub use side::{EMPTY, Piece, Side};

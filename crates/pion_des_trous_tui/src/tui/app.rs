//! Application state and input handling.

use pion_des_trous::{
    Game, GameConfig, GameError, HoverTracker, Location, PointerMapper, PointerTarget,
};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// Converts a terminal cell to pointer coordinates.
///
/// Terminal cells are about twice as tall as they are wide, so one grid unit
/// is two columns wide and one row tall. Halving the column keeps the grid
/// square on screen while the mapper works with a single unit.
pub fn pointer_position(column: u16, row: u16) -> (f64, f64) {
    (f64::from(column) / 2.0, f64::from(row))
}

/// Main application state.
pub struct App {
    config: GameConfig,
    game: Game,
    hover: HoverTracker,
    board_area: Rect,
    status_message: String,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let game = Game::from_config(&config)?;
        let status_message = format!("{} plays first", game.current_side());
        Ok(Self {
            config,
            game,
            hover: HoverTracker::new(),
            board_area: Rect::default(),
            status_message,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The hole under the pointer, if it is free.
    pub fn hovered(&self) -> Option<Location> {
        self.hover.hovered()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Where the board was last drawn.
    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    /// Records where the board is drawn, for hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        if area != self.board_area {
            debug!(?area, "Board area changed");
            self.board_area = area;
            self.hover.reset();
        }
    }

    /// Hit-tester for the board's current screen position.
    pub fn mapper(&self) -> PointerMapper {
        let (x, y) = pointer_position(self.board_area.x, self.board_area.y);
        PointerMapper::new(1.0).with_origin(x, y)
    }

    fn locate(&self, column: u16, row: u16) -> PointerTarget {
        if !self.board_area.contains((column, row).into()) {
            return PointerTarget::Miss;
        }
        let (x, y) = pointer_position(column, row);
        self.game.locate(&self.mapper(), x, y)
    }

    /// Updates the hover highlight for pointer motion.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let target = self.locate(column, row);
        if let Some(PointerTarget::Hole(loc)) = self.hover.track(target) {
            debug!(%loc, "Hovering hole");
        }
    }

    /// Plays the clicked hole, if it is free.
    #[instrument(skip(self))]
    pub fn pointer_clicked(&mut self, column: u16, row: u16) {
        match self.locate(column, row) {
            PointerTarget::Hole(loc) => match self.game.play(loc.col, loc.row) {
                Ok(played) => {
                    self.hover.reset();
                    self.status_message = if self.game.is_exhausted() {
                        format!(
                            "{} has no pawns left. Press 'r' to restart or 'q' to quit.",
                            self.game.current_side()
                        )
                    } else {
                        format!(
                            "{} played {}. {} to move.",
                            played.side,
                            played.to,
                            self.game.current_side()
                        )
                    };
                }
                Err(e) => {
                    self.status_message = e.to_string();
                }
            },
            PointerTarget::Pawn(loc) => {
                self.status_message = GameError::CellOccupied {
                    col: loc.col,
                    row: loc.row,
                }
                .to_string();
            }
            PointerTarget::Miss => {}
        }
    }

    /// Starts a new game with the same configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), GameError> {
        info!("Restarting game");
        self.game = Game::from_config(&self.config)?;
        self.hover.reset();
        self.status_message = format!("Game restarted. {} plays first.", self.game.current_side());
        Ok(())
    }
}

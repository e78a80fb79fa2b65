//! Pointer hit-testing against a rendered grid.
//!
//! The grid is drawn in square units. Holes sit on even multiples of the
//! unit; the odd positions, and the zero row and column, are board surface
//! between holes:
//!
//! ```text
//!  grid:  0   1   2   3   4   5   6 ...
//!         |---|-#-|---|-#-|---|-#-|
//!                ^hole 0   ^hole 1
//! ```
//!
//! A pointer at `x` falls in grid column `ceil(x / unit)`.

use crate::{Board, Location};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// What a pointer position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerTarget {
    /// An empty hole that can be played.
    Hole(Location),
    /// A hole that already holds a pawn.
    Pawn(Location),
    /// Board surface, off the grid, or outside the board.
    Miss,
}

impl PointerTarget {
    /// Returns the playable hole, if any.
    pub fn hole(self) -> Option<Location> {
        match self {
            PointerTarget::Hole(loc) => Some(loc),
            PointerTarget::Pawn(_) | PointerTarget::Miss => None,
        }
    }
}

/// Resolves a position to a grid cell, ignoring what the board holds.
///
/// Returns `None` on grid lines, at or before the origin, and for
/// non-finite input or a non-positive unit. The cell may lie beyond any
/// particular board; [`classify`] checks that.
pub fn grid_location(x: f64, y: f64, unit: f64) -> Option<Location> {
    if !(unit > 0.0) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let grid_col = (x / unit).ceil();
    let grid_row = (y / unit).ceil();
    Some(Location::new(hole_index(grid_col)?, hole_index(grid_row)?))
}

/// Maps an even, positive grid line to its hole index.
fn hole_index(grid: f64) -> Option<usize> {
    if grid < 2.0 || grid % 2.0 != 0.0 || grid > usize::MAX as f64 {
        return None;
    }
    Some(grid as usize / 2 - 1)
}

/// Classifies a pointer position against a board.
///
/// Total over its inputs and free of side effects.
#[instrument(level = "trace", skip(board))]
pub fn classify(board: &Board, x: f64, y: f64, unit: f64) -> PointerTarget {
    let Some(loc) = grid_location(x, y, unit) else {
        return PointerTarget::Miss;
    };
    match board.is_empty(loc.col, loc.row) {
        Ok(true) => PointerTarget::Hole(loc),
        Ok(false) => PointerTarget::Pawn(loc),
        Err(_) => PointerTarget::Miss,
    }
}

/// Hit-tester for a grid drawn at an offset on screen.
///
/// Pointer positions are translated to the play area's top-left corner
/// before classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    unit: f64,
    origin_x: f64,
    origin_y: f64,
}

impl PointerMapper {
    /// Creates a mapper for a grid drawn at the screen origin.
    pub fn new(unit: f64) -> Self {
        Self {
            unit,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Moves the play area's top-left corner.
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Size of one grid unit.
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Resolves a screen position to a grid cell, ignoring board contents.
    pub fn grid_location(&self, x: f64, y: f64) -> Option<Location> {
        grid_location(x - self.origin_x, y - self.origin_y, self.unit)
    }

    /// Classifies a screen position against a board.
    pub fn classify(&self, board: &Board, x: f64, y: f64) -> PointerTarget {
        classify(board, x - self.origin_x, y - self.origin_y, self.unit)
    }
}

/// Hover state: nothing highlighted, or one hole highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No hole is highlighted.
    #[default]
    Idle,
    /// The hole under the pointer is highlighted.
    Hovering(Location),
}

/// Debounces pointer motion so each hole is reported once on entry.
///
/// Misses and pawns are always reported and reset the tracker; a hole is
/// reported only when it differs from the one already hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hover state.
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// The hovered hole, if any.
    pub fn hovered(&self) -> Option<Location> {
        match self.state {
            HoverState::Hovering(loc) => Some(loc),
            HoverState::Idle => None,
        }
    }

    /// Feeds one classification and returns the event to act on, if any.
    pub fn track(&mut self, target: PointerTarget) -> Option<PointerTarget> {
        match target {
            PointerTarget::Hole(loc) if self.state == HoverState::Hovering(loc) => None,
            PointerTarget::Hole(loc) => {
                trace!(%loc, "Hover entered hole");
                self.state = HoverState::Hovering(loc);
                Some(target)
            }
            PointerTarget::Pawn(_) | PointerTarget::Miss => {
                self.state = HoverState::Idle;
                Some(target)
            }
        }
    }

    /// Forgets the hovered hole.
    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
    }
}

//! The m×n grid of holes.

use crate::config::DEFAULT_BOARD_SIZE;
use crate::{EMPTY, GameError, GameResult, Piece, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A hole on the board, addressed by column and row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({col}, {row})")]
pub struct Location {
    /// Column, counted from the left.
    pub col: usize,
    /// Row, counted from the top.
    pub row: usize,
}

/// Grid of holes, each either empty or holding one piece.
///
/// The board knows nothing about players or turns. Placing onto an occupied
/// hole is allowed here; callers that care about occupancy check first.
///
/// Deserialization goes through the same checks as [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct Board {
    columns: usize,
    rows: usize,
    /// Cells in row-major order.
    cells: Vec<Piece>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimension`] if either dimension is zero.
    #[instrument]
    pub fn new(columns: usize, rows: usize) -> GameResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(GameError::InvalidDimension { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![EMPTY; columns * rows],
        })
    }

    /// Creates an empty square board.
    pub fn square(size: usize) -> GameResult<Self> {
        Self::new(size, size)
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns true if the location is on the board.
    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.columns && row < self.rows
    }

    fn index(&self, col: usize, row: usize) -> GameResult<usize> {
        if self.in_bounds(col, row) {
            Ok(row * self.columns + col)
        } else {
            Err(GameError::OutOfBounds { col, row })
        }
    }

    /// Returns true if the hole holds no piece.
    pub fn is_empty(&self, col: usize, row: usize) -> GameResult<bool> {
        Ok(self.piece_at(col, row)? == EMPTY)
    }

    /// Returns the raw value stored in the hole.
    pub fn piece_at(&self, col: usize, row: usize) -> GameResult<Piece> {
        let idx = self.index(col, row)?;
        Ok(self.cells[idx])
    }

    /// Puts a piece in the hole, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfBounds`] if the location is off the board.
    /// - [`GameError::InvalidPiece`] if `piece` is the empty sentinel.
    #[instrument(skip(self))]
    pub fn place(&mut self, col: usize, row: usize, piece: Piece) -> GameResult<()> {
        let idx = self.index(col, row)?;
        if piece == EMPTY {
            return Err(GameError::InvalidPiece);
        }
        self.cells[idx] = piece;
        Ok(())
    }

    /// Takes the piece out of the hole and returns it.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfBounds`] if the location is off the board.
    /// - [`GameError::EmptyCell`] if there is nothing to take.
    #[instrument(skip(self))]
    pub fn remove(&mut self, col: usize, row: usize) -> GameResult<Piece> {
        let idx = self.index(col, row)?;
        let piece = self.cells[idx];
        if piece == EMPTY {
            return Err(GameError::EmptyCell { col, row });
        }
        self.cells[idx] = EMPTY;
        Ok(piece)
    }

    /// Moves a piece from one hole to another.
    ///
    /// Both ends are validated before anything is written, so a failed move
    /// leaves the board untouched. Moving a piece onto itself is a no-op.
    #[instrument(skip(self))]
    pub fn move_piece(&mut self, from: Location, to: Location) -> GameResult<()> {
        let from_idx = self.index(from.col, from.row)?;
        let to_idx = self.index(to.col, to.row)?;
        if self.cells[from_idx] == EMPTY {
            return Err(GameError::EmptyCell {
                col: from.col,
                row: from.row,
            });
        }

        let piece = self.remove(from.col, from.row)?;
        self.place(to.col, to.row, piece)?;
        debug!(%from, %to, piece, "Piece moved");
        debug_assert_eq!(self.cells[to_idx], piece);
        Ok(())
    }

    /// Number of holes holding a piece.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&p| p != EMPTY).count()
    }

    /// Iterates over every location, row by row.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| Location::new(col, row)))
    }

    /// Returns the raw cells in row-major order.
    pub fn cells(&self) -> &[Piece] {
        &self.cells
    }
}

/// Board as it appears on the wire, before validation.
#[derive(Deserialize)]
struct StoredBoard {
    columns: usize,
    rows: usize,
    cells: Vec<Piece>,
}

impl TryFrom<StoredBoard> for Board {
    type Error = GameError;

    fn try_from(stored: StoredBoard) -> GameResult<Self> {
        let mut board = Board::new(stored.columns, stored.rows)?;
        if stored.cells.len() != board.cells.len() {
            return Err(GameError::CellCountMismatch {
                expected: board.cells.len(),
                found: stored.cells.len(),
            });
        }
        for &piece in &stored.cells {
            Side::decode(piece)?;
        }
        board.cells = stored.cells;
        Ok(board)
    }
}

impl Default for Board {
    /// The standard 14×14 board.
    fn default() -> Self {
        Self {
            columns: DEFAULT_BOARD_SIZE,
            rows: DEFAULT_BOARD_SIZE,
            cells: vec![EMPTY; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row
                .iter()
                .map(|&piece| match Side::decode(piece) {
                    Ok(Side::None) => ".",
                    Ok(Side::Light) => "o",
                    Ok(Side::Dark) => "x",
                    Err(_) => "?",
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 5),
            Err(GameError::InvalidDimension { columns: 0, rows: 5 })
        );
        assert_eq!(
            Board::new(5, 0),
            Err(GameError::InvalidDimension { columns: 5, rows: 0 })
        );
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.cells().len(), 12);
        for loc in board.locations() {
            assert_eq!(board.is_empty(loc.col, loc.row), Ok(true));
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_bounds_on_rectangular_board() {
        let board = Board::new(4, 2).unwrap();
        assert!(board.in_bounds(3, 1));
        assert!(!board.in_bounds(4, 0));
        assert!(!board.in_bounds(0, 2));
        assert_eq!(
            board.piece_at(1, 2),
            Err(GameError::OutOfBounds { col: 1, row: 2 })
        );
    }

    #[test]
    fn test_rectangular_indexing_does_not_alias() {
        let mut board = Board::new(5, 2).unwrap();
        board.place(4, 0, 1).unwrap();
        board.place(0, 1, 2).unwrap();
        assert_eq!(board.piece_at(4, 0), Ok(1));
        assert_eq!(board.piece_at(0, 1), Ok(2));
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_place_overwrites_and_rejects_empty() {
        let mut board = Board::square(3).unwrap();
        board.place(1, 1, 1).unwrap();
        board.place(1, 1, 2).unwrap();
        assert_eq!(board.piece_at(1, 1), Ok(2));
        assert_eq!(board.place(0, 0, EMPTY), Err(GameError::InvalidPiece));
        assert_eq!(board.is_empty(0, 0), Ok(true));
    }

    #[test]
    fn test_remove() {
        let mut board = Board::square(3).unwrap();
        assert_eq!(
            board.remove(2, 2),
            Err(GameError::EmptyCell { col: 2, row: 2 })
        );
        board.place(2, 2, 1).unwrap();
        assert_eq!(board.remove(2, 2), Ok(1));
        assert_eq!(board.is_empty(2, 2), Ok(true));
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::square(3).unwrap();
        board.place(0, 0, 2).unwrap();
        board
            .move_piece(Location::new(0, 0), Location::new(2, 1))
            .unwrap();
        assert_eq!(board.is_empty(0, 0), Ok(true));
        assert_eq!(board.piece_at(2, 1), Ok(2));
    }

    #[test]
    fn test_move_onto_itself_is_noop() {
        let mut board = Board::square(3).unwrap();
        board.place(1, 2, 1).unwrap();
        let before = board.clone();
        board
            .move_piece(Location::new(1, 2), Location::new(1, 2))
            .unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_failed_move_leaves_board_untouched() {
        let mut board = Board::square(3).unwrap();
        board.place(0, 0, 1).unwrap();
        let before = board.clone();

        let result = board.move_piece(Location::new(0, 0), Location::new(3, 0));
        assert_eq!(result, Err(GameError::OutOfBounds { col: 3, row: 0 }));
        assert_eq!(board, before);

        let result = board.move_piece(Location::new(1, 1), Location::new(2, 2));
        assert_eq!(result, Err(GameError::EmptyCell { col: 1, row: 1 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_equality() {
        let mut a = Board::square(2).unwrap();
        let b = Board::square(2).unwrap();
        assert_eq!(a, b);
        a.place(0, 1, 1).unwrap();
        assert_ne!(a, b);
        assert_ne!(Board::new(2, 3).unwrap(), Board::new(3, 2).unwrap());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 2).unwrap();
        board.place(0, 0, 1).unwrap();
        board.place(2, 1, 2).unwrap();
        assert_eq!(board.to_string(), "o . .\n. . x");
    }

    #[test]
    fn test_deserialize_valid_board() {
        let mut board = Board::new(3, 2).unwrap();
        board.place(2, 1, 2).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_short_cells() {
        let result = serde_json::from_str::<Board>(r#"{"columns":3,"rows":3,"cells":[0]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Board expects 9 cells, got 1"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_zero_dimensions() {
        let result = serde_json::from_str::<Board>(r#"{"columns":0,"rows":0,"cells":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_pieces() {
        let result = serde_json::from_str::<Board>(r#"{"columns":1,"rows":2,"cells":[0,7]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Value 7 does not encode a piece"), "{err}");
    }
}

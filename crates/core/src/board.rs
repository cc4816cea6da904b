//! Board module - manages the game grid
//!
//! The board is an 8x12 grid where each cell is either empty or settled.
//! Uses a flat array for cache locality and zero-allocation line clears.
//! Coordinates: (x, y) where x ranges 0..7 (left to right), y ranges 0..11 (top to bottom).
//! Rows above the board (y < 0) are legal for a falling piece and never collide.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line-clear pass, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 8 columns x 12 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Mark a cell as settled. Returns false if out of bounds.
    pub fn settle(&mut self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = Cell::Settled;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and settled
    pub fn is_settled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Settled))
    }

    /// Collision test for a shape anchored at (x, y).
    ///
    /// A filled cell collides when its column is outside the board, its row is
    /// at or below the floor, or it lands on a settled cell at a visible row.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.minos().iter().all(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || !self.is_settled(px, py)
        })
    }

    /// Write a shape's cells as settled; cells above the board are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for &(dx, dy) in shape.minos() {
            let py = y + dy;
            if py >= 0 {
                self.settle(x + dx, py);
            }
        }
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| *cell == Cell::Settled)
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// The same number of empty rows appear at the top, so the row count never
    /// changes. Returns the removed row indices, sorted bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);

        cleared_rows
    }

    /// Number of settled cells
    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Settled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.settled_count() == 0
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board into a snapshot marker grid.
    pub fn write_marker_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].marker();
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Build a board from text rows; `#` is settled, anything else is empty.
    ///
    /// Missing rows are filled from the top, so callers only describe the bottom.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '#' {
                    board.settle(x as i8, (offset + i) as i8);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(7, 0), Some(7));
        assert_eq!(Board::index(0, 1), Some(8));
        assert_eq!(Board::index(7, 11), Some(95));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(8, 0), None);
        assert_eq!(Board::index(0, 12), None);
    }

    #[test]
    fn fits_allows_rows_above_board() {
        let board = Board::from_rows(&["########"]);
        let l = get_shape(PieceKind::L);
        assert!(board.fits(l, 0, -2));
        assert!(board.fits(l, 0, -3));
    }

    #[test]
    fn fits_rejects_walls_and_floor() {
        let board = Board::new();
        let i = get_shape(PieceKind::I);
        assert!(board.fits(i, 4, 0));
        assert!(!board.fits(i, 5, 0));
        assert!(!board.fits(i, -1, 0));
        assert!(board.fits(i, 0, 11));
        assert!(!board.fits(i, 0, 12));
    }

    #[test]
    fn merge_skips_cells_above_board() {
        let mut board = Board::new();
        board.merge(get_shape(PieceKind::L), 2, -2);
        assert_eq!(board.settled_count(), 2);
        assert!(board.is_settled(2, 0));
        assert!(board.is_settled(3, 0));
    }

    #[test]
    fn clear_full_rows_compacts_and_keeps_height() {
        let mut board = Board::from_rows(&["#.......", "########", "..#.....", "########"]);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[11, 9]);
        assert_eq!(board.cells().len(), BOARD_SIZE);
        assert!(board.is_settled(2, 11));
        assert!(board.is_settled(0, 10));
        assert_eq!(board.settled_count(), 2);
    }

    #[test]
    fn marker_grid_mirrors_cells() {
        let board = Board::from_rows(&["#......#"]);
        let mut grid = [[9u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_marker_grid(&mut grid);
        assert_eq!(grid[11], [1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(grid[0], [0; BOARD_WIDTH as usize]);
    }
}

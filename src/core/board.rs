//! Board module - manages the game grid.
//!
//! The board is a 10x20 grid where each cell is empty or holds a settled
//! piece color. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//! Dimensions never change; cleared rows are replaced by an empty row at the
//! top, never removed permanently.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_COLS * BOARD_ROWS) as usize;

/// The game board - 10 columns x 20 rows using flat array storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_COLS as usize) + (x as usize))
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position is occupied (within bounds and filled).
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS as usize {
            return false;
        }
        let start = y * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: rows above shift down one position and an empty row
    /// appears at the top. Relative order of the remaining settled cells is
    /// preserved.
    pub fn remove_row(&mut self, y: usize) {
        if y >= BOARD_ROWS as usize {
            return;
        }

        let width = BOARD_COLS as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear all full rows in one pass and return their indices in scan order.
    ///
    /// Scans bottom to top; after removing a row the same index is re-examined,
    /// since the row above has shifted into it.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();

        let mut y = BOARD_ROWS as usize;
        while y > 0 {
            y -= 1;
            if self.is_row_full(y) {
                self.remove_row(y);
                let _ = cleared.try_push(y);
                // Re-examine the same index on the next iteration.
                y += 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

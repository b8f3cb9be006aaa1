//! Board module - manages the occupancy grid
//!
//! The board is a 12x24 grid where each cell is either empty or holds the color of a
//! landed square. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..23 (top to bottom).
//!
//! The board never holds squares of the falling piece; those are committed with
//! [`Board::place`] only when the piece lands.

use crate::types::{Color, Coord, COLUMNS, ROWS};

/// Occupancy state of one cell
pub type Cell = Option<Color>;

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

/// The game board - 12 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(coord: Coord) -> Option<usize> {
        if !coord.in_bounds() {
            return None;
        }
        Some((coord.y as usize) * (COLUMNS as usize) + (coord.x as usize))
    }

    pub fn width(&self) -> u8 {
        COLUMNS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        Self::index(coord).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    ///
    /// Out-of-bounds coordinates are reported as unoccupied; callers that care about the
    /// walls and the floor check bounds themselves.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Some(_)))
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(None))
    }

    /// Commit a landed square
    /// Returns false (and leaves the board untouched) if out of bounds
    pub fn place(&mut self, coord: Coord, color: Color) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                true
            }
            None => false,
        }
    }

    /// Empty a single cell
    /// Returns false if out of bounds
    pub fn clear(&mut self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                self.cells[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Empty every cell of a row
    pub fn clear_row(&mut self, row: usize) {
        if row >= ROWS as usize {
            return;
        }
        let start = row * COLUMNS as usize;
        for cell in &mut self.cells[start..start + COLUMNS as usize] {
            *cell = None;
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS as usize {
            return false;
        }
        let start = row * COLUMNS as usize;
        self.cells[start..start + COLUMNS as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Shift every row at or above `from_row` down by `by` rows.
    ///
    /// Row `r` receives the content of row `r - by`; rows without a source above the
    /// top of the grid become empty. Rows below `from_row` are untouched, so the
    /// content of `from_row` itself is overwritten.
    pub fn shift_rows_down(&mut self, from_row: usize, by: usize) {
        if from_row >= ROWS as usize || by == 0 {
            return;
        }
        let width = COLUMNS as usize;
        for row in (0..=from_row).rev() {
            if row >= by {
                let src_start = (row - by) * width;
                self.cells
                    .copy_within(src_start..src_start + width, row * width);
            } else {
                self.clear_row(row);
            }
        }
    }

    /// Remove every full row and compact the rows above it, rescanning until no full
    /// row remains. Returns the total number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut removed = 0;
        loop {
            let mut found = 0;
            // Top-down order keeps the indices of lower full rows stable while
            // upper ones collapse.
            for row in 0..ROWS as usize {
                if self.is_row_full(row) {
                    self.shift_rows_down(row, 1);
                    found += 1;
                }
            }
            if found == 0 {
                return removed;
            }
            removed += found;
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill a whole row with one color (for testing)
    #[cfg(test)]
    pub fn fill_row(&mut self, row: i8, color: Color) {
        for x in 0..COLUMNS as i8 {
            self.place(Coord::new(x, row), color);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

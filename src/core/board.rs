//! Board module - the 10x20 grid, collision checking, merging, line clears.
//!
//! Cells are stored in a flat row-major array for cache locality.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom. Negative y is legal for the active piece (spawn rows above the
//! visible board) but never persists: merging skips those cells.

use arrayvec::ArrayVec;

use crate::core::piece::ShapeGrid;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const COLS: usize = BOARD_WIDTH as usize;
const ROWS: usize = BOARD_HEIGHT as usize;
const BOARD_SIZE: usize = COLS * ROWS;

/// The game board - 10 columns x 20 rows of flat cell storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get the cell at (x, y), or None when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a shape fits at top-left offset (x, y).
    ///
    /// For every filled matrix cell: the column must land in `[0, COLS)` and
    /// the row must stay above ROWS. Rows below 0 skip the occupancy check
    /// because pieces spawn partially above the visible board. Pure and
    /// deterministic; this is the single collision predicate for movement,
    /// rotation, and spawn checking.
    pub fn fits(&self, shape: &ShapeGrid, x: i8, y: i8) -> bool {
        for (row, col) in shape.iter_filled() {
            let bx = x + col as i8;
            let by = y + row as i8;

            if bx < 0 || bx >= COLS as i8 || by >= ROWS as i8 {
                return false;
            }

            if by >= 0 && self.cells[(by as usize) * COLS + (bx as usize)].is_some() {
                return false;
            }
        }
        true
    }

    /// Merge a locked piece into the board.
    ///
    /// Cells whose board row is negative are dropped; off-board rows never
    /// persist.
    pub fn merge(&mut self, shape: &ShapeGrid, x: i8, y: i8, kind: PieceKind) {
        for (row, col) in shape.iter_filled() {
            let by = y + row as i8;
            if by >= 0 {
                self.set(x + col as i8, by, Some(kind));
            }
        }
    }

    /// Whether every cell of a row is filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        let start = y * COLS;
        self.cells[start..start + COLS].iter().all(Cell::is_some)
    }

    /// Remove all complete rows, shifting rows above down and inserting
    /// empty rows at the top. Returns the cleared row indices, bottom to top.
    ///
    /// The scan walks bottom-to-top and re-tests an index after removing it,
    /// so a row that shifts into a just-cleared slot is never skipped. At
    /// most four rows clear per lock (tallest piece footprint).
    pub fn clear_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut y = ROWS;
        while y > 0 {
            y -= 1;
            if !self.is_row_full(y) {
                continue;
            }
            let _ = cleared.try_push(y);
            self.remove_row(y);
            // Re-test the same index: the row above just shifted into it.
            y += 1;
        }
        cleared
    }

    /// Remove one row: shift everything above it down and blank the top row.
    fn remove_row(&mut self, y: usize) {
        for dst in (1..=y).rev() {
            let src_start = (dst - 1) * COLS;
            self.cells.copy_within(src_start..src_start + COLS, dst * COLS);
        }
        for cell in &mut self.cells[..COLS] {
            *cell = None;
        }
    }

    /// Count rows with at least one filled cell.
    pub fn occupied_rows(&self) -> usize {
        (0..ROWS)
            .filter(|&y| self.cells[y * COLS..(y + 1) * COLS].iter().any(Cell::is_some))
            .count()
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write the grid as color ids: 0 = empty, `kind.index() + 1` otherwise.
    pub fn write_color_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        for y in 0..ROWS {
            for x in 0..COLS {
                out[y][x] = match self.cells[y * COLS + x] {
                    Some(kind) => kind.index() as u8 + 1,
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

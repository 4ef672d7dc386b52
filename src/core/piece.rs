//! Piece module - tetromino templates and the active falling piece.
//!
//! Each template is an N x N binary matrix (N = 2 for O, 3 for J/L/S/T/Z,
//! 4 for I). The active piece carries a mutable copy of its template so
//! rotation can replace the matrix without touching the catalog.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Backing size of the largest template (the I piece).
pub const MAX_SHAPE: usize = 4;

/// N x N binary shape matrix in a fixed 4x4 backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    size: usize,
    cells: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl ShapeGrid {
    const fn from_rows(size: usize, rows: [[bool; MAX_SHAPE]; MAX_SHAPE]) -> Self {
        Self { size, cells: rows }
    }

    /// Bounding-box side length (2, 3, or 4).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix cell at (row, col) is filled.
    ///
    /// Out-of-matrix coordinates read as empty.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row][col]
    }

    /// 90-degree clockwise rotation: `rotated[i][j] = self[N-1-j][i]`.
    ///
    /// Returns a candidate matrix; the caller validates it against the board
    /// before committing. Rotating four times yields the original.
    pub fn rotated(&self) -> Self {
        let n = self.size;
        let mut out = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (i, row) in out.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - j][i];
            }
        }
        Self {
            size: n,
            cells: out,
        }
    }

    /// Iterate the (row, col) offsets of all filled cells.
    pub fn iter_filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |row| (0..n).filter_map(move |col| self.filled(row, col).then_some((row, col))))
    }
}

const fn row(pattern: [u8; MAX_SHAPE]) -> [bool; MAX_SHAPE] {
    [
        pattern[0] != 0,
        pattern[1] != 0,
        pattern[2] != 0,
        pattern[3] != 0,
    ]
}

const EMPTY_ROW: [bool; MAX_SHAPE] = row([0, 0, 0, 0]);

const I_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    4,
    [
        row([0, 0, 0, 0]),
        row([1, 1, 1, 1]),
        row([0, 0, 0, 0]),
        row([0, 0, 0, 0]),
    ],
);

const J_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    3,
    [
        row([1, 0, 0, 0]),
        row([1, 1, 1, 0]),
        row([0, 0, 0, 0]),
        EMPTY_ROW,
    ],
);

const L_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    3,
    [
        row([0, 0, 1, 0]),
        row([1, 1, 1, 0]),
        row([0, 0, 0, 0]),
        EMPTY_ROW,
    ],
);

const O_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    2,
    [
        row([1, 1, 0, 0]),
        row([1, 1, 0, 0]),
        EMPTY_ROW,
        EMPTY_ROW,
    ],
);

const S_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    3,
    [
        row([0, 1, 1, 0]),
        row([1, 1, 0, 0]),
        row([0, 0, 0, 0]),
        EMPTY_ROW,
    ],
);

const T_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    3,
    [
        row([0, 1, 0, 0]),
        row([1, 1, 1, 0]),
        row([0, 0, 0, 0]),
        EMPTY_ROW,
    ],
);

const Z_TEMPLATE: ShapeGrid = ShapeGrid::from_rows(
    3,
    [
        row([1, 1, 0, 0]),
        row([0, 1, 1, 0]),
        row([0, 0, 0, 0]),
        EMPTY_ROW,
    ],
);

/// Get the spawn-orientation template for a piece kind.
pub fn template(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => I_TEMPLATE,
        PieceKind::J => J_TEMPLATE,
        PieceKind::L => L_TEMPLATE,
        PieceKind::O => O_TEMPLATE,
        PieceKind::S => S_TEMPLATE,
        PieceKind::T => T_TEMPLATE,
        PieceKind::Z => Z_TEMPLATE,
    }
}

/// Active falling piece: a template copy plus a top-left board offset.
///
/// `y` can be negative right after spawn; off-board rows are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: horizontally centered
    /// (`COLS/2 - N/2`), vertically at row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        let x = (BOARD_WIDTH as i8) / 2 - (shape.size() as i8) / 2;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }
}

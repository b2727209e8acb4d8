//! Pieces module - tetromino shape matrices and the piece factory
//!
//! A shape is a small rectangular 0/1 matrix (at most 4x4) stored inline, so
//! every [`Piece`] owns its matrix by value. Rotating an active piece never
//! touches the canonical templates below.
//!
//! Rotation is a plain clockwise matrix rotation without wall kicks:
//! `rotated[i][j] = shape[rows - 1 - j][i]`.

use crate::types::{PieceColor, PieceKind, BOARD_WIDTH};

/// Largest shape dimension (rows or columns).
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular occupancy matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a `R x C` matrix of 0/1 values.
    ///
    /// Panics (at compile time for consts) when the matrix exceeds 4x4.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0 && R <= MAX_SHAPE_DIM && C <= MAX_SHAPE_DIM);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `(row, col)` is occupied. Out-of-range positions are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(dx, dy)` offsets from the top-left anchor.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let cols = self.cols as usize;
        (0..self.rows as usize).flat_map(move |row| {
            (0..cols)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Clockwise quarter turn. The result is `cols x rows`.
    pub fn rotated_cw(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Row `row` as a 0/1 vector, handy for previews and assertions.
    pub fn row_bits(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        let cols = if row < self.rows as usize {
            self.cols as usize
        } else {
            0
        };
        (0..cols).map(move |col| self.cells[row][col] as u8)
    }
}

const I_SHAPE: Shape = Shape::from_matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = Shape::from_matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = Shape::from_matrix([[0, 1, 0], [1, 1, 1]]);
const S_SHAPE: Shape = Shape::from_matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = Shape::from_matrix([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: Shape = Shape::from_matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = Shape::from_matrix([[0, 0, 1], [1, 1, 1]]);

/// Canonical spawn-orientation shape for a kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// A piece: kind and color tags plus its own shape matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: PieceColor,
    shape: Shape,
}

impl Piece {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Replace the shape with a rotated one. Only the controller does this,
    /// after checking the rotated shape fits.
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}

/// Piece factory: a fresh piece of `kind` in spawn orientation.
pub fn create_piece(kind: PieceKind) -> Piece {
    Piece {
        kind,
        color: kind.color(),
        shape: template(kind),
    }
}

/// Spawn column for a shape: centered, rounding left.
pub fn spawn_x(shape: &Shape) -> i8 {
    ((BOARD_WIDTH - shape.cols()) / 2) as i8
}

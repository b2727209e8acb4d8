//! Piece controller - the falling piece and its moves against a board.
//!
//! A blocked downward step is how the engine learns that a piece has
//! landed; the session turns [`MoveResult::Landed`] into a lock. Rotation is
//! tried in place only, so a rotation that does not fit simply fails.

use crate::board::Board;
use crate::pieces::{spawn_x, Piece, Shape};

/// Outcome of [`ActivePiece::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    /// Sideways or upward move that did not fit; nothing changed.
    Blocked,
    /// Downward move that did not fit; the piece must lock.
    Landed,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    /// Top-left corner of the shape's bounding box.
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place `piece` at the spawn column on row 0.
    pub fn spawn(piece: Piece) -> Self {
        Self {
            x: spawn_x(piece.shape()),
            y: 0,
            piece,
        }
    }

    pub fn shape(&self) -> &Shape {
        self.piece.shape()
    }

    /// Check if the piece fits where it is
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(self.shape(), self.x, self.y)
    }

    /// Check if piece can move by the given offset
    pub fn can_move(&self, board: &Board, dx: i8, dy: i8) -> bool {
        board.can_place(self.shape(), self.x + dx, self.y + dy)
    }

    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> MoveResult {
        if self.can_move(board, dx, dy) {
            self.x += dx;
            self.y += dy;
            MoveResult::Moved
        } else if dy > 0 {
            MoveResult::Landed
        } else {
            MoveResult::Blocked
        }
    }

    /// Rotate clockwise in place. Returns false (shape untouched) if the
    /// rotated shape does not fit at the current anchor.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape().rotated_cw();
        if !board.can_place(&rotated, self.x, self.y) {
            return false;
        }
        self.piece.set_shape(rotated);
        true
    }

    /// Row the piece would come to rest on if dropped straight down.
    pub fn landing_y(&self, board: &Board) -> i8 {
        let mut y = self.y;
        while board.can_place(self.shape(), self.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Move to the landing row and return the number of rows travelled.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let target = self.landing_y(board);
        let distance = (target - self.y) as u32;
        self.y = target;
        distance
    }
}

//! Read-only copy of session state handed to renderers once per frame.

use crate::controller::ActivePiece;
use crate::pieces::{Piece, Shape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_PREVIEW_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.piece.kind(),
            shape: *value.piece.shape(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Piece codes per cell, 0 = empty (see `PieceKind::code`).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece; `None` when ghost display is off.
    pub ghost_y: Option<i8>,
    /// Preview queue, front first; only the first `preview_count` slots are set.
    pub next: [Option<Piece>; MAX_PREVIEW_COUNT],
    pub preview_count: usize,
    pub hold: Option<Piece>,
    pub can_hold: bool,
    pub advanced_mode: bool,
    pub show_ghost: bool,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Queued pieces in preview order.
    pub fn next_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.next.iter().take(self.preview_count).flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: [None; MAX_PREVIEW_COUNT],
            preview_count: 0,
            hold: None,
            can_hold: true,
            advanced_mode: false,
            show_ghost: true,
            running: false,
            paused: false,
            game_over: false,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: 0,
        }
    }
}

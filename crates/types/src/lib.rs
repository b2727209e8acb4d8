//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal front-end and the event log alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: column `(10 - shape_width) / 2`, row 0
//!
//! # Drop Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame cadence (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Gravity floor |
//!
//! # Examples
//!
//! ```
//! use retro_tetris_types::{GameAction, PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_code(3).unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), PieceColor::Purple);
//!
//! let action = GameAction::HardDrop;
//! assert_ne!(action, GameAction::SoftDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Cumulative lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by lines cleared at once (0-4).
///
/// Multiplied by the level the clear happened on.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Preview queue length used when nothing is configured
pub const DEFAULT_PREVIEW_COUNT: usize = 1;

/// Upper bound on the preview queue length
pub const MAX_PREVIEW_COUNT: usize = 5;

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed color tag:
/// - **I**: cyan
/// - **O**: yellow
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order (the order a fresh bag starts from).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::T => PieceColor::Purple,
            PieceKind::S => PieceColor::Green,
            PieceKind::Z => PieceColor::Red,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
        }
    }

    /// Non-zero code used in `u8` board grids (0 means empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Color tag attached to every piece.
///
/// Renderers map these to whatever palette they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// Player input events consumed by the session
///
/// Every action is applied synchronously, in the order received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks it when blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise, in place
    Rotate,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Swap the piece with the hold slot (advanced mode only)
    Hold,
    /// Toggle pause
    Pause,
    /// Start a game, or restart the one in progress
    Restart,
}

/// Core-side event emitted after a lock or a game over.
///
/// The session keeps only the most recent one; the host drains it with
/// `take_last_event` once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreLastEvent {
    /// A piece was committed to the board.
    pub locked: bool,
    pub lines_cleared: u32,
    /// Points awarded for the line clear.
    pub line_clear_score: u32,
    /// The next piece could not spawn.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

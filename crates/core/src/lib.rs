//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, the session state machine and the
//! drop timer. It has **zero dependencies** on rendering, terminals or I/O:
//! hosts drive it with inputs and timestamps and read back a
//! [`GameSnapshot`] once per frame.
//!
//! # Module Structure
//!
//! - [`rng`]: uniform and 7-bag piece randomizers over an injectable [`RandomSource`]
//! - [`pieces`]: shape matrices, clockwise rotation and the piece factory
//! - [`board`]: 10x20 grid with placement checks and line clearing
//! - [`controller`]: the falling piece (move, rotate, hard drop, landing row)
//! - [`queue`]: next-piece preview and the hold slot
//! - [`scoring`]: score, level and gravity speed
//! - [`session`]: the [`GameSession`] aggregate tying everything together
//! - [`snapshot`]: the read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Rotation**: plain clockwise matrix rotation, no wall kicks
//! - **Locking**: a piece locks as soon as a downward step is blocked
//! - **Scoring**: `[0, 100, 300, 500, 800][lines] * level`
//! - **Levels**: one level per 10 lines, starting at level 1
//! - **Advanced mode**: 7-bag randomizer and a once-per-piece hold slot
//!
//! # Example
//!
//! ```
//! use retro_tetris_core::{GameSession, SessionConfig};
//! use retro_tetris_types::GameAction;
//!
//! let mut game = GameSession::with_seed(12345, SessionConfig::default());
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! let snap = game.snapshot();
//! assert!(snap.running);
//! assert!(snap.board[19].iter().any(|&c| c != 0));
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`] every frame with a monotonic millisecond
//! timestamp. The piece steps down once more than the level's drop interval
//! (1000ms at level 1, 50ms less per level, never below 50ms) has passed.

pub mod board;
pub mod controller;
pub mod pieces;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use retro_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use controller::{ActivePiece, MoveResult};
pub use pieces::{create_piece, spawn_x, template, Piece, Shape};
pub use queue::QueueManager;
pub use rng::{RandomSource, Randomizer, RandomizerMode, SimpleRng};
pub use scoring::ScoreEngine;
pub use session::{GameSession, SessionConfig};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

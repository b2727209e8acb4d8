//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s for the
//! session plus a few host-side setting commands (preview length, advanced
//! mode, ghost). Key repeat is left to the terminal: every press is one
//! command, applied in arrival order.

pub mod map;

pub use retro_tetris_types as types;

pub use map::{map_key, should_quit, KeyCommand};

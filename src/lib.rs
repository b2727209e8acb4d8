//! Retro Tetris (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces that
//! only the terminal runner needs: environment [`config`] and the optional
//! JSONL [`event_log`].

pub mod config;
pub mod event_log;

pub use retro_tetris_core as core;
pub use retro_tetris_input as input;
pub use retro_tetris_term as term;
pub use retro_tetris_types as types;

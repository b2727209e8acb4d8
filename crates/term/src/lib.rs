//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and renders into a simple framebuffer that is
//! diffed and flushed to the terminal through `crossterm`.
//!
//! - [`GameView`] turns a core `GameSnapshot` into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] owns the terminal and flushes framebuffers

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use retro_tetris_core as core;
pub use retro_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    color_rgb, status_message, AnchorY, GameView, Viewport, GAME_OVER_MESSAGE, PAUSED_MESSAGE,
    START_MESSAGE,
};
pub use renderer::{encode_frame_into, TerminalRenderer};

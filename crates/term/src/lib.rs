//! Terminal rendering for the snake game.
//!
//! Snapshots are drawn into a plain [`FrameBuffer`] by [`GameView`], then
//! flushed by [`TerminalRenderer`], which only rewrites glyphs that changed.
//! Each board cell is two columns wide so the board looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};

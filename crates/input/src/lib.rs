//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameEvent`]s. Ticks are
//! not input: the driver's timer produces `Advance`.

pub mod map;

pub use tui_snake_types as types;

pub use map::{direction_for_key, handle_key_event, should_quit};

//! Game driver: owns the running game, its tick timer, and the high score store.
//!
//! The terminal binary feeds keyboard events into [`Session::dispatch`] and
//! waits on [`Session::timeout`] between ticks. Nothing here touches the
//! terminal, so the whole loop can run headless in tests.

pub mod session;
pub mod timer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use session::Session;
pub use timer::TickTimer;

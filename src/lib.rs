//! TUI Snake (workspace facade crate).
//!
//! Re-exports the member crates under `tui_snake::{core,engine,input,store,term,types}`
//! and hosts the startup configuration shared by the binary and tests.

pub mod config;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::AppConfig;

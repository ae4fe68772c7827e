//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the snake rules and the state they act on.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: same seed and events produce identical games
//! - **Testable**: every rule is a plain function of `(state, event)`
//! - **Portable**: runs in the terminal front end, benchmarks, or headless
//!
//! # Module Structure
//!
//! - [`state`]: the immutable [`GameState`] snapshot and its constructors
//! - [`transition`]: the rule engine mapping `(state, event)` to the next state
//! - [`projection`]: N×N cell classification for renderers
//! - [`snapshot`]: projection plus HUD values, one frame's worth of data
//! - [`rng`]: seeded uniform food placement
//!
//! # Game Rules
//!
//! - The snake starts as one segment in the centre, heading up
//! - Each `Advance` moves the head one cell; the tail follows unless food was eaten
//! - Eating food grows the snake by one and scores one point
//! - Leaving the board or running into the body ends the game; entering the
//!   cell the tail is leaving is allowed
//! - A snake longer than one segment can't reverse direction
//! - Filling the whole board wins
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{initial_state, transition};
//! use tui_snake_types::{Direction, GameEvent};
//!
//! let state = initial_state(0);
//! let state = transition(&state, GameEvent::ChangeDirection(Direction::Left));
//! let state = transition(&state, GameEvent::Advance);
//!
//! assert!(state.is_playing());
//! assert_eq!(state.head().x, 9);
//! assert!(state.food().is_some());
//! ```

pub mod projection;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod transition;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use projection::{project, project_into, CellGrid};
pub use rng::FoodRng;
pub use snapshot::GameSnapshot;
pub use state::{initial_state, GameConfig, GameState, DEFAULT_SEED};
pub use transition::transition;

//! Session: the single owner of the running game.
//!
//! Every event, whether from the tick timer or the keyboard, goes through
//! [`Session::dispatch`] one at a time. After each transition the session keeps
//! the tick timer in step with `is_playing` and persists a changed high score.

use std::time::{Duration, Instant};

use tui_snake_core::{transition, GameConfig, GameState};
use tui_snake_store::{load_or_zero, HighScoreStore};
use tui_snake_types::GameEvent;

use crate::timer::TickTimer;

pub struct Session<S: HighScoreStore> {
    state: GameState,
    timer: TickTimer,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    /// Load the high score from `store` and start a game at `now`.
    pub fn new(config: GameConfig, tick_interval: Duration, store: S, now: Instant) -> Self {
        let high_score = load_or_zero(&store);
        let state = GameState::new(config, high_score);
        let mut timer = TickTimer::new(tick_interval);
        if state.is_playing() {
            timer.start(now);
        }
        log::info!(
            "New game: {}x{} board, seed {}, tick {:?}, high score {}",
            state.grid_size(),
            state.grid_size(),
            state.seed(),
            timer.interval(),
            high_score
        );
        Self {
            state,
            timer,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// How long the driver may block waiting for input before the next tick.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.timer.timeout(now)
    }

    /// Fire a due tick, if any. Returns whether the state changed.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if self.timer.fire(now) {
            self.dispatch(GameEvent::Advance, now)
        } else {
            false
        }
    }

    /// Apply one event. Returns whether the state changed.
    ///
    /// `Reset` always counts as a change: it starts a fresh tick cadence even
    /// when the game it replaces had not moved yet.
    pub fn dispatch(&mut self, event: GameEvent, now: Instant) -> bool {
        let next = transition(&self.state, event);
        if next == self.state && event != GameEvent::Reset {
            return false;
        }
        let prev = std::mem::replace(&mut self.state, next);

        match (prev.is_playing(), self.state.is_playing(), event) {
            (true, false, _) => {
                self.timer.cancel();
                log::info!(
                    "Game over ({}): score {}, length {}",
                    self.state.outcome().map(|o| o.as_str()).unwrap_or("-"),
                    self.state.score(),
                    self.state.len()
                );
            }
            (false, true, _) => {
                self.timer.start(now);
                log::info!("New game started");
            }
            (true, true, GameEvent::Reset) => {
                self.timer.start(now);
                log::info!("Game restarted");
            }
            _ => {}
        }

        if event == GameEvent::Advance && prev.food().is_none() {
            if let Some(food) = self.state.food() {
                log::debug!("Food placed at ({}, {})", food.x, food.y);
            }
        }

        if self.state.high_score() != prev.high_score() {
            if let Err(e) = self.store.save(self.state.high_score()) {
                log::warn!("Failed to save high score: {:#}", e);
            }
        }

        true
    }
}

//! Game state module - one immutable instant of the simulation
//!
//! A [`GameState`] is never mutated in place by callers. Every accepted event
//! produces a fresh value through [`crate::transition`].

use std::collections::VecDeque;

use crate::rng::FoodRng;
use crate::types::*;

/// Seed used by [`initial_state`].
pub const DEFAULT_SEED: u64 = 1;

/// Board and randomness parameters of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: u8,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(grid_size: u8, seed: u64) -> Self {
        Self { grid_size, seed }
    }

    /// Whether `size` is a supported board side.
    pub fn is_valid_grid_size(size: u8) -> bool {
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid_size: u8,
    /// Index 0 is the head, the back is the tail.
    pub(crate) snake: VecDeque<Coordinate>,
    pub(crate) direction: Direction,
    pub(crate) food: Option<Coordinate>,
    pub(crate) is_playing: bool,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) rng: FoodRng,
}

/// A fresh game on the default board, carrying over `high_score`.
pub fn initial_state(high_score: u32) -> GameState {
    GameState::new(GameConfig::default(), high_score)
}

impl GameState {
    /// Create a new game.
    ///
    /// # Panics
    ///
    /// Panics if `config.grid_size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        assert!(
            GameConfig::is_valid_grid_size(config.grid_size),
            "grid size {} outside {}..={}",
            config.grid_size,
            MIN_GRID_SIZE,
            MAX_GRID_SIZE
        );
        Self::fresh(config.grid_size, high_score, FoodRng::new(config.seed))
    }

    pub(crate) fn fresh(grid_size: u8, high_score: u32, rng: FoodRng) -> Self {
        let center = grid_size / 2;
        Self {
            grid_size,
            snake: VecDeque::from([Coordinate::new(center, center)]),
            direction: Direction::Up,
            food: None,
            is_playing: true,
            score: INITIAL_SCORE,
            high_score,
            outcome: None,
            rng,
        }
    }

    /// Replace the snake body (head first).
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, leaves the board, or covers the food.
    pub fn with_snake(mut self, body: impl IntoIterator<Item = Coordinate>) -> Self {
        let snake: VecDeque<Coordinate> = body.into_iter().collect();
        assert!(!snake.is_empty(), "snake must have at least one segment");
        assert!(
            snake.iter().all(|c| c.in_bounds(self.grid_size)),
            "snake segment outside the {}x{} board",
            self.grid_size,
            self.grid_size
        );
        if let Some(food) = self.food {
            assert!(!snake.contains(&food), "food under the snake at {:?}", food);
        }
        self.snake = snake;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Place (or remove) the food.
    ///
    /// # Panics
    ///
    /// Panics if the food is off the board or on the snake.
    pub fn with_food(mut self, food: Option<Coordinate>) -> Self {
        if let Some(c) = food {
            assert!(c.in_bounds(self.grid_size), "food outside the board at {:?}", c);
            assert!(!self.occupies(c), "food under the snake at {:?}", c);
        }
        self.food = food;
        self
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn snake(&self) -> &VecDeque<Coordinate> {
        &self.snake
    }

    /// The head segment.
    ///
    /// # Panics
    ///
    /// Panics on an empty snake, which no transition can produce.
    pub fn head(&self) -> Coordinate {
        assert!(!self.snake.is_empty(), "snake invariant broken: no segments");
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Coordinate> {
        self.food
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Seed of the food generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    /// Whether any snake segment sits on `c`.
    pub fn occupies(&self, c: Coordinate) -> bool {
        self.snake.contains(&c)
    }

    /// Apply one event, returning the next state.
    pub fn apply(&self, event: GameEvent) -> GameState {
        crate::transition::transition(self, event)
    }

    /// Stop play, folding the current score into the high score.
    pub(crate) fn into_finished(mut self, outcome: Outcome) -> Self {
        self.is_playing = false;
        self.high_score = self.high_score.max(self.score);
        self.outcome = Some(outcome);
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        initial_state(0)
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The board is a square of side `N` cells:
//!
//! - **Default side**: 20 cells
//! - **Valid range**: `MIN_GRID_SIZE..=MAX_GRID_SIZE`
//! - **Origin**: `(0, 0)` is the top-left cell, `x` grows right, `y` grows down
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 150 | Interval between two `Advance` events |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Coordinate, Direction, DEFAULT_GRID_SIZE};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! let head = Coordinate::new(5, 5);
//! assert_eq!(head.step(Direction::Left, DEFAULT_GRID_SIZE), Some(Coordinate::new(4, 5)));
//! assert_eq!(Coordinate::new(0, 5).step(Direction::Left, DEFAULT_GRID_SIZE), None);
//! ```

/// Default board side in cells.
pub const DEFAULT_GRID_SIZE: u8 = 20;

/// Smallest supported board side.
pub const MIN_GRID_SIZE: u8 = 2;

/// Largest supported board side.
pub const MAX_GRID_SIZE: u8 = 100;

/// Default interval between ticks in milliseconds.
pub const TICK_MS: u32 = 150;

/// Score of a freshly started game.
pub const INITIAL_SCORE: u32 = 0;

/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 1;

/// The four travel directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The exact reverse of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset `(dx, dy)` of one step in this direction.
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on a board of side `size`.
    pub fn in_bounds(&self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// The neighbouring coordinate one step in `dir`.
    ///
    /// Returns `None` when the step leaves a board of side `size`.
    pub fn step(&self, dir: Direction, size: u8) -> Option<Self> {
        let (dx, dy) = dir.offset();
        let x = self.x as i16 + dx;
        let y = self.y as i16 + dy;
        if x < 0 || y < 0 || x >= size as i16 || y >= size as i16 {
            return None;
        }
        Some(Self::new(x as u8, y as u8))
    }

    /// Row-major index on a board of side `size`.
    pub fn index(&self, size: u8) -> usize {
        (self.y as usize) * (size as usize) + (self.x as usize)
    }
}

/// Events consumed by the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Set the travel direction used by the next `Advance`
    ChangeDirection(Direction),
    /// One simulation tick
    Advance,
    /// Start a fresh game, keeping only the high score
    Reset,
}

/// Classification of one projected board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Food,
    Body,
    Head,
}

/// Why play stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The head left the board
    Wall,
    /// The head ran into the snake's own body
    SelfCollision,
    /// The snake fills every cell; nowhere left to place food
    BoardFull,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::BoardFull)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Wall => "wall",
            Outcome::SelfCollision => "self",
            Outcome::BoardFull => "board_full",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn step_follows_screen_axes() {
        let c = Coordinate::new(3, 3);
        assert_eq!(c.step(Direction::Up, 10), Some(Coordinate::new(3, 2)));
        assert_eq!(c.step(Direction::Down, 10), Some(Coordinate::new(3, 4)));
        assert_eq!(c.step(Direction::Left, 10), Some(Coordinate::new(2, 3)));
        assert_eq!(c.step(Direction::Right, 10), Some(Coordinate::new(4, 3)));
    }

    #[test]
    fn step_off_any_edge_is_none() {
        assert_eq!(Coordinate::new(0, 4).step(Direction::Left, 10), None);
        assert_eq!(Coordinate::new(9, 4).step(Direction::Right, 10), None);
        assert_eq!(Coordinate::new(4, 0).step(Direction::Up, 10), None);
        assert_eq!(Coordinate::new(4, 9).step(Direction::Down, 10), None);
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(Coordinate::new(0, 0).index(10), 0);
        assert_eq!(Coordinate::new(9, 0).index(10), 9);
        assert_eq!(Coordinate::new(0, 1).index(10), 10);
        assert_eq!(Coordinate::new(9, 9).index(10), 99);
    }

    #[test]
    fn only_a_full_board_is_a_win() {
        assert!(Outcome::BoardFull.is_win());
        assert!(!Outcome::Wall.is_win());
        assert!(!Outcome::SelfCollision.is_win());
    }

    #[test]
    fn grid_bounds_are_sane() {
        assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE);
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }
}

//! RNG module - food placement
//!
//! Food is placed uniformly at random on a free cell. Sampling draws random
//! cells and rejects occupied ones; once a sampling budget is spent (crowded
//! boards) it falls back to choosing uniformly among the remaining free cells,
//! so placement always terminates.
//!
//! The generator is a seeded PCG, so a game is fully reproducible from its
//! seed and event sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::Coordinate;

/// Rejected samples allowed per board cell before falling back to a scan.
const REJECTIONS_PER_CELL: usize = 2;

/// Seeded food placement generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRng {
    rng: Pcg32,
    seed: u64,
}

impl FoodRng {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly random cell on a board of side `size`.
    pub fn next_cell(&mut self, size: u8) -> Coordinate {
        let x = self.rng.random_range(0..size);
        let y = self.rng.random_range(0..size);
        Coordinate::new(x, y)
    }

    /// Pick a uniformly random cell for which `occupied` is false.
    ///
    /// Returns `None` only when every cell is occupied.
    pub fn place_food(
        &mut self,
        size: u8,
        occupied: impl Fn(Coordinate) -> bool,
    ) -> Option<Coordinate> {
        let cells = (size as usize) * (size as usize);

        for _ in 0..cells * REJECTIONS_PER_CELL {
            let candidate = self.next_cell(size);
            if !occupied(candidate) {
                return Some(candidate);
            }
        }

        let free = free_cells(size, &occupied).count();
        if free == 0 {
            return None;
        }
        let pick = self.rng.random_range(0..free);
        free_cells(size, &occupied).nth(pick)
    }
}

impl Default for FoodRng {
    fn default() -> Self {
        Self::new(1)
    }
}

fn free_cells<'a>(
    size: u8,
    occupied: &'a impl Fn(Coordinate) -> bool,
) -> impl Iterator<Item = Coordinate> + 'a {
    (0..size)
        .flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
        .filter(move |c| !occupied(*c))
}

//! Cell-grid projection for renderers.
//!
//! The grid is derived from a [`GameState`] on demand and never stored as
//! independent truth.

use crate::state::GameState;
use crate::types::{CellKind, Coordinate};

/// N×N grid of classified cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellGrid {
    size: u8,
    cells: Vec<CellKind>,
}

impl CellGrid {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![CellKind::Empty; (size as usize) * (size as usize)],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    pub fn get(&self, x: u8, y: u8) -> Option<CellKind> {
        let c = Coordinate::new(x, y);
        if !c.in_bounds(self.size) {
            return None;
        }
        Some(self.cells[c.index(self.size)])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    fn reset(&mut self, size: u8) {
        self.size = size;
        self.cells.clear();
        self.cells
            .resize((size as usize) * (size as usize), CellKind::Empty);
    }

    fn mark(&mut self, c: Coordinate, kind: CellKind) {
        if c.in_bounds(self.size) {
            let i = c.index(self.size);
            self.cells[i] = kind;
        }
    }
}

/// Classify every cell of `state`'s board.
pub fn project(state: &GameState) -> CellGrid {
    let mut grid = CellGrid::new(state.grid_size());
    project_into(state, &mut grid);
    grid
}

/// Like [`project`], reusing `out`'s allocation.
pub fn project_into(state: &GameState, out: &mut CellGrid) {
    out.reset(state.grid_size());

    if let Some(food) = state.food() {
        out.mark(food, CellKind::Food);
    }
    for &segment in state.snake().iter().skip(1) {
        out.mark(segment, CellKind::Body);
    }
    out.mark(state.head(), CellKind::Head);
}

use crate::projection::{project_into, CellGrid};
use crate::state::GameState;
use crate::types::{Direction, Outcome};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: CellGrid,
    pub score: u32,
    pub high_score: u32,
    pub direction: Direction,
    pub is_playing: bool,
    pub outcome: Option<Outcome>,
    pub length: usize,
}

impl GameSnapshot {
    pub fn grid_size(&self) -> u8 {
        self.cells.size()
    }

    pub fn game_over(&self) -> bool {
        !self.is_playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: CellGrid::default(),
            score: 0,
            high_score: 0,
            direction: Direction::Up,
            is_playing: false,
            outcome: None,
            length: 0,
        }
    }
}

impl GameState {
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        project_into(self, &mut out.cells);
        out.score = self.score();
        out.high_score = self.high_score();
        out.direction = self.direction();
        out.is_playing = self.is_playing();
        out.outcome = self.outcome();
        out.length = self.len();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use gesture::*;
pub use grid::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod gesture;
mod grid;
mod snapshot;
mod types;

/// Parameters of one puzzle: grid size plus the start and goal cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub size: Coord2,
    pub start: Coord2,
    pub goal: Coord2,
}

impl PuzzleConfig {
    pub const fn new(size: Coord2, start: Coord2, goal: Coord2) -> Self {
        Self { size, start, goal }
    }

    pub fn validate(self) -> Result<Self> {
        let Self { size, start, goal } = self;

        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigFault::EmptyGrid.into());
        }
        if !in_bounds(start, size) {
            return Err(ConfigFault::StartOutOfBounds.into());
        }
        if !in_bounds(goal, size) {
            return Err(ConfigFault::GoalOutOfBounds.into());
        }
        if start == goal {
            return Err(ConfigFault::StartIsGoal.into());
        }

        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for PuzzleConfig {
    /// 5x5 board from the top-left corner to the bottom-right corner.
    fn default() -> Self {
        Self::new((5, 5), (0, 0), (4, 4))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Illegal move, nothing changed. Not an error.
    Rejected,
    Extended,
    Cleared,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Rejected => false,
            Extended => true,
            Cleared => true,
        }
    }
}

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned read view of a [`PathEngine`] for renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub start: Coord2,
    pub goal: Coord2,
    pub cells: Vec<Cell>,
    pub path: Vec<Coord2>,
    pub active: bool,
    pub cleared: bool,
}

impl Snapshot {
    /// `None` until the engine has been initialized.
    pub fn from_engine(engine: &PathEngine) -> Option<Self> {
        let grid = engine.grid()?;

        Some(Self {
            size: grid.size(),
            start: grid.start(),
            goal: grid.goal(),
            cells: grid.cells().collect(),
            path: engine.path().to_vec(),
            active: engine.is_active(),
            cleared: engine.is_cleared(),
        })
    }

    pub fn config(&self) -> PuzzleConfig {
        PuzzleConfig::new(self.size, self.start, self.goal)
    }

    pub fn is_visited(&self, coords: Coord2) -> bool {
        self.path.contains(&coords)
    }

    /// Re-checks the path invariants, for snapshots that came from outside the engine.
    pub fn validate(&self) -> Result<()> {
        let grid = PuzzleGrid::new(self.config())?;

        if !self.cells.iter().copied().eq(grid.cells()) {
            return Err(GameError::InvalidSnapshot);
        }

        if self.path.first() != Some(&self.start) {
            return Err(GameError::InvalidSnapshot);
        }

        if self.path.iter().any(|&coords| !grid.contains(coords)) {
            return Err(GameError::InvalidSnapshot);
        }

        if self.path.windows(2).any(|pair| !is_adjacent(pair[0], pair[1])) {
            return Err(GameError::InvalidSnapshot);
        }

        let unique: BTreeSet<_> = self.path.iter().collect();
        if unique.len() != self.path.len() {
            return Err(GameError::InvalidSnapshot);
        }

        // the goal can only ever be the final step
        if let Some(goal_index) = self.path.iter().position(|&coords| coords == self.goal) {
            if goal_index + 1 != usize::from(grid.total_cells()) {
                return Err(GameError::InvalidSnapshot);
            }
        }

        let covers_grid = self.path.len() == usize::from(grid.total_cells());
        // exactly one of `active` and `cleared` holds once a puzzle exists
        if self.cleared != covers_grid || self.active == self.cleared {
            return Err(GameError::InvalidSnapshot);
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Fixed role of a cell, assigned once when the grid is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellRole {
    Start,
    Goal,
    Normal,
}

impl CellRole {
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    pub const fn is_goal(self) -> bool {
        matches!(self, Self::Goal)
    }
}

impl Default for CellRole {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub role: CellRole,
}

impl Cell {
    pub const fn new(coords: Coord2, role: CellRole) -> Self {
        Self { coords, role }
    }
}

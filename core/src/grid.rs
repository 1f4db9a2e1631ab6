use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Immutable role assignment for every cell of a validated puzzle.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleGrid {
    roles: Array2<CellRole>,
    size: Coord2,
    start: Coord2,
    goal: Coord2,
}

impl PuzzleGrid {
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        let PuzzleConfig { size, start, goal } = config.validate()?;

        let mut roles: Array2<CellRole> = Array2::default(size.to_nd_index());
        roles[start.to_nd_index()] = CellRole::Start;
        roles[goal.to_nd_index()] = CellRole::Goal;

        Ok(Self {
            roles,
            size,
            start,
            goal,
        })
    }

    pub fn config(&self) -> PuzzleConfig {
        PuzzleConfig::new(self.size, self.start, self.goal)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn goal(&self) -> Coord2 {
        self.goal
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size)
    }

    pub fn role_at(&self, coords: Coord2) -> Option<CellRole> {
        self.roles.get(coords.to_nd_index()).copied()
    }

    /// All cells in row-major order: `y` ascending outside, `x` ascending inside.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (width, height) = self.size;
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new((x, y), self[(x, y)])))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

impl Index<Coord2> for PuzzleGrid {
    type Output = CellRole;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.roles[(x as usize, y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn cells_are_generated_row_major() {
        let grid = PuzzleGrid::new(PuzzleConfig::new((3, 2), (0, 0), (2, 1))).unwrap();

        let coords: Vec<_> = grid.cells().map(|cell| cell.coords).collect();

        assert_eq!(coords, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn exactly_one_start_and_one_goal() {
        let grid = PuzzleGrid::new(PuzzleConfig::new((4, 3), (2, 1), (0, 2))).unwrap();

        let starts: Vec<_> = grid.cells().filter(|cell| cell.role.is_start()).collect();
        let goals: Vec<_> = grid.cells().filter(|cell| cell.role.is_goal()).collect();

        assert_eq!(starts, [Cell::new((2, 1), CellRole::Start)]);
        assert_eq!(goals, [Cell::new((0, 2), CellRole::Goal)]);
        assert_eq!(grid.cells().count(), 12);
    }

    #[test]
    fn role_lookup_outside_grid_is_none() {
        let grid = PuzzleGrid::new(PuzzleConfig::default()).unwrap();

        assert_eq!(grid.role_at((4, 4)), Some(CellRole::Goal));
        assert_eq!(grid.role_at((5, 0)), None);
        assert_eq!(grid.role_at((0, 5)), None);
        assert!(!grid.contains((5, 5)));
    }

    #[test]
    fn invalid_config_builds_no_grid() {
        let result = PuzzleGrid::new(PuzzleConfig::new((2, 2), (0, 0), (2, 2)));

        assert_eq!(
            result,
            Err(GameError::InvalidConfiguration(ConfigFault::GoalOutOfBounds))
        );
    }
}

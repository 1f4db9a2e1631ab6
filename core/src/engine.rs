use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No puzzle has been initialized yet.
    Idle,
    Active,
    Cleared,
}

impl EngineState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_cleared(self) -> bool {
        matches!(self, Self::Cleared)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Why a move was dropped. Only used for tracing, callers see [`MoveOutcome::Rejected`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Rejection {
    NotActive,
    NotAdjacent,
    OutOfBounds,
    Revisit,
    PrematureGoal,
}

/// Owns one puzzle session: the grid, the path drawn so far, and the lifecycle state.
///
/// Every mutating call either commits a consistent new state or leaves the
/// previous one untouched. Illegal moves are silent rejections, not errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathEngine {
    grid: Option<PuzzleGrid>,
    path: Vec<Coord2>,
    visited: Array2<bool>,
    state: EngineState,
}

impl PathEngine {
    /// Builds an engine with `config` already initialized.
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        let mut engine = Self::default();
        engine.init_with(config)?;
        Ok(engine)
    }

    pub fn init(&mut self, width: Coord, height: Coord, start: Coord2, goal: Coord2) -> Result<()> {
        self.init_with(PuzzleConfig::new((width, height), start, goal))
    }

    /// Discards any previous session and starts `config` from its start cell.
    ///
    /// On error the previous session is left as it was.
    pub fn init_with(&mut self, config: PuzzleConfig) -> Result<()> {
        let grid = PuzzleGrid::new(config).inspect_err(|err| {
            log::warn!("refusing puzzle {:?}: {}", config, err);
        })?;

        let start = grid.start();
        let mut visited: Array2<bool> = Array2::default(grid.size().to_nd_index());
        visited[start.to_nd_index()] = true;

        self.grid = Some(grid);
        self.path = alloc::vec![start];
        self.visited = visited;
        self.state = EngineState::Active;

        log::debug!("puzzle initialized: {:?}", config);
        Ok(())
    }

    /// Truncates the path back to the start cell and makes the puzzle playable again.
    ///
    /// No-op until a puzzle has been initialized.
    pub fn reset_game(&mut self) {
        let Some(start) = self.grid.as_ref().map(PuzzleGrid::start) else {
            return;
        };

        for &coords in &self.path {
            self.visited[coords.to_nd_index()] = false;
        }
        self.path.clear();
        self.path.push(start);
        self.visited[start.to_nd_index()] = true;
        self.state = EngineState::Active;

        log::debug!("puzzle reset to {:?}", start);
    }

    /// Attempts to extend the path with `coords`.
    pub fn try_move(&mut self, coords: Coord2) -> MoveOutcome {
        match self.check_move(coords) {
            Ok(outcome) => {
                self.path.push(coords);
                self.visited[coords.to_nd_index()] = true;

                if outcome == MoveOutcome::Cleared {
                    self.state = EngineState::Cleared;
                    log::debug!("puzzle cleared in {} cells", self.path.len());
                }

                outcome
            }
            Err(reason) => {
                log::trace!("move to {:?} rejected: {:?}", coords, reason);
                MoveOutcome::Rejected
            }
        }
    }

    /// Whether [`try_move`](Self::try_move) would accept `coords` right now.
    pub fn can_move_to(&self, coords: Coord2) -> bool {
        self.check_move(coords).is_ok()
    }

    /// Accepted neighbours of the path head, ordered up, left, right, down.
    pub fn legal_moves(&self) -> impl Iterator<Item = Coord2> + '_ {
        let neighbors = match (&self.grid, self.head()) {
            (Some(grid), Some(head)) => grid.iter_neighbors(head),
            _ => NeighborIter::new((0, 0), (0, 0)),
        };
        neighbors.filter(move |&coords| self.can_move_to(coords))
    }

    fn check_move(&self, coords: Coord2) -> core::result::Result<MoveOutcome, Rejection> {
        let (Some(grid), Some(head), true) = (&self.grid, self.head(), self.state.is_active())
        else {
            return Err(Rejection::NotActive);
        };

        if !is_adjacent(head, coords) {
            return Err(Rejection::NotAdjacent);
        }

        let role = grid.role_at(coords).ok_or(Rejection::OutOfBounds)?;

        if self.visited[coords.to_nd_index()] {
            return Err(Rejection::Revisit);
        }

        if role.is_goal() {
            if self.path.len() + 1 == usize::from(grid.total_cells()) {
                Ok(MoveOutcome::Cleared)
            } else {
                Err(Rejection::PrematureGoal)
            }
        } else {
            Ok(MoveOutcome::Extended)
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_cleared(&self) -> bool {
        self.state.is_cleared()
    }

    pub fn grid(&self) -> Option<&PuzzleGrid> {
        self.grid.as_ref()
    }

    pub fn config(&self) -> Option<PuzzleConfig> {
        self.grid.as_ref().map(PuzzleGrid::config)
    }

    /// Grid dimensions, `(0, 0)` before initialization.
    pub fn size(&self) -> Coord2 {
        self.grid.as_ref().map_or((0, 0), PuzzleGrid::size)
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.as_ref().map_or(0, PuzzleGrid::total_cells)
    }

    pub fn start(&self) -> Option<Coord2> {
        self.grid.as_ref().map(PuzzleGrid::start)
    }

    pub fn goal(&self) -> Option<Coord2> {
        self.grid.as_ref().map(PuzzleGrid::goal)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.iter().flat_map(|grid| grid.cells())
    }

    pub fn role_at(&self, coords: Coord2) -> Option<CellRole> {
        self.grid.as_ref()?.role_at(coords)
    }

    pub fn path(&self) -> &[Coord2] {
        &self.path
    }

    pub fn path_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.path
            .iter()
            .filter_map(move |&coords| Some(Cell::new(coords, self.role_at(coords)?)))
    }

    pub fn head(&self) -> Option<Coord2> {
        self.path.last().copied()
    }

    pub fn is_visited(&self, coords: Coord2) -> bool {
        self.visited
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn remaining_cells(&self) -> CellCount {
        let drawn = CellCount::try_from(self.path.len()).unwrap_or(CellCount::MAX);
        self.total_cells().saturating_sub(drawn)
    }
}

use thiserror::Error;

/// Which part of a puzzle configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigFault {
    #[error("grid must be at least 1x1")]
    EmptyGrid,
    #[error("start is outside the grid")]
    StartOutOfBounds,
    #[error("goal is outside the grid")]
    GoalOutOfBounds,
    #[error("start and goal are the same cell")]
    StartIsGoal,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigFault),
    #[error("Snapshot violates path invariants")]
    InvalidSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;

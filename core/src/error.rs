use crate::CellCount;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 2")]
    InvalidSize,
    #[error("Mines must be between 1 and {max}")]
    InvalidMineCount { max: CellCount },
    #[error("Mines have already been placed")]
    MinesAlreadyPlaced,
    #[error("Out of bounds")]
    OutOfBounds,
}

pub type Result<T> = std::result::Result<T, GameError>;

use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {0:?} are outside the board")]
    OutOfBounds(Coord2),
    #[error("Board size must be at least 1")]
    EmptyBoard,
    #[error("Too many mines, requested {mines} but at most {max} fit")]
    TooManyMines { mines: CellCount, max: CellCount },
    #[error("At least one life is required")]
    NoLives,
}

impl GameError {
    /// Whether the error rejects a configuration rather than a move.
    pub const fn is_invalid_config(self) -> bool {
        matches!(
            self,
            Self::EmptyBoard | Self::TooManyMines { .. } | Self::NoLives
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

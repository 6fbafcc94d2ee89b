//! Game engine for a square Minesweeper variant where the player has several lives.
//!
//! A [`GameSession`] owns one [`Board`] and drives it through
//! `NotStarted → Running → {Won, Lost}`. Mines are placed lazily on the first
//! reveal so the first click can be protected, see [`StartTile`].

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use reveal::{flood_expand, reveal_cell, toggle_mark};
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
pub mod reveal;
mod snapshot;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
    pub lives: Lives,
    #[serde(default)]
    pub start_tile: StartTile,
}

impl GameConfig {
    pub fn new(size: Coord, mines: CellCount, lives: Lives) -> Result<Self> {
        Self {
            size,
            mines,
            lives,
            start_tile: StartTile::default(),
        }
        .validate()
    }

    pub const fn with_start_tile(self, start_tile: StartTile) -> Self {
        Self { start_tile, ..self }
    }

    /// Checks that the board exists, keeps a safe cell and the player can survive a move.
    pub fn validate(self) -> Result<Self> {
        if self.size == 0 {
            return Err(GameError::EmptyBoard);
        }
        let max = self.total_cells() - 1;
        if self.mines > max {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                max,
            });
        }
        if self.lives == 0 {
            return Err(GameError::NoLives);
        }
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn beginner() -> Self {
        Self {
            size: 9,
            mines: 10,
            lives: 3,
            start_tile: StartTile::SimpleSafe,
        }
    }

    pub const fn intermediate() -> Self {
        Self {
            size: 16,
            mines: 40,
            lives: 3,
            start_tile: StartTile::SimpleSafe,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            mines: 3,
            lives: 3,
            start_tile: StartTile::SimpleSafe,
        }
    }
}

/// Outcome of toggling a mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoOp,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoOp)
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoOp,
    HitMine,
    /// A numbered cell, carrying its count of adjacent mines.
    Opened(u8),
    /// A zero cell, its connected region was flooded as well.
    OpenedAndExpanded,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoOp)
    }
}

use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell, as handed to a renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Covered,
    Marked,
    Open(u8),
    /// A mine the player revealed.
    Exploded,
    // only used to show the result after the game is lost:
    Mine,
    WrongMark,
}

impl Tile {
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Open(_) | Self::Exploded)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked | Self::WrongMark)
    }

    /// Mine status, only disclosed for shown cells.
    pub const fn is_mine(self) -> Option<bool> {
        match self {
            Self::Open(_) => Some(false),
            Self::Exploded => Some(true),
            _ => None,
        }
    }

    pub const fn mines_around(self) -> Option<u8> {
        match self {
            Self::Open(count) => Some(count),
            _ => None,
        }
    }
}

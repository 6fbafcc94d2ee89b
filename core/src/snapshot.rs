use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a session, everything a renderer needs to redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord,
    pub state: GameState,
    pub lives_remaining: Lives,
    pub mine_count: CellCount,
    pub marked_count: CellCount,
    pub shown_count: CellCount,
    pub tiles: Array2<Tile>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let state = session.state();
        let size = board.size();
        let mut tiles = Array2::from_elem((size, size).to_nd_index(), Tile::Covered);
        let mut shown_count = 0;

        for (coords, cell) in board.iter_cells() {
            if cell.is_shown {
                shown_count += 1;
            }
            tiles[coords.to_nd_index()] = tile_for(cell, state);
        }

        Self {
            size,
            state,
            lives_remaining: session.lives_remaining(),
            mine_count: session.config().mines,
            marked_count: board.marked_count(),
            shown_count,
            tiles,
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    /// How many mines have not been marked yet, negative when over-marked.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_count) - i32::from(self.marked_count)
    }
}

/// Maps a cell to what the player may see, disclosing mines once the game is over.
fn tile_for(cell: &Cell, state: GameState) -> Tile {
    match (cell.is_shown, cell.is_mine, cell.is_marked, state) {
        (true, true, _, _) => Tile::Exploded,
        (true, false, _, _) => Tile::Open(cell.mines_around),
        (false, true, false, GameState::Lost) => Tile::Mine,
        (false, true, false, GameState::Won) => Tile::Marked,
        (false, false, true, GameState::Lost) => Tile::WrongMark,
        (false, _, true, _) => Tile::Marked,
        (false, _, false, _) => Tile::Covered,
    }
}

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_shown: bool,
    pub is_marked: bool,
    /// Only meaningful once mines have been placed and counted.
    pub mines_around: u8,
}

impl Cell {
    pub const fn is_covered(self) -> bool {
        !self.is_shown
    }
}

/// Square grid owning all of its cells.
///
/// The board keeps running totals of mines, marks and shown safe cells so the
/// game state machine never has to rescan the grid after a move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    marked_count: CellCount,
    shown_safe_count: CellCount,
}

impl Board {
    /// Allocates `size`×`size` covered, mine-free cells.
    pub fn new(size: Coord) -> Self {
        let side = usize::from(size);
        Self {
            cells: Array2::default([side, side]),
            mine_count: 0,
            marked_count: 0,
            shown_safe_count: 0,
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count
    }

    pub fn shown_safe_count(&self) -> CellCount {
        self.shown_safe_count
    }

    /// Whether every non-mine cell has been shown.
    pub fn all_safe_shown(&self) -> bool {
        self.shown_safe_count == self.safe_cell_count()
    }

    pub fn contains(&self, (i, j): Coord2) -> bool {
        let size = self.size();
        i < size && j < size
    }

    /// Bounds-checked lookup, `None` when either coordinate is off the board.
    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let size = self.size();
        NeighborIter::new(coords, (size, size))
    }

    /// Iterates over every cell together with its coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((i, j), cell)| ((i as Coord, j as Coord), cell))
    }

    /// Returns `true` when the cell was not a mine before.
    pub(crate) fn set_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;
        self.mine_count += 1;
        true
    }

    pub(crate) fn set_mines_around(&mut self, coords: Coord2, count: u8) {
        self.cells[coords.to_nd_index()].mines_around = count;
    }

    /// Returns `true` when the cell was covered before.
    pub(crate) fn show(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_shown {
            return false;
        }
        cell.is_shown = true;
        if !cell.is_mine {
            self.shown_safe_count += 1;
        }
        true
    }

    /// Flips the mark on a covered cell and returns the new mark state.
    pub(crate) fn flip_mark(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_marked = !cell.is_marked;
        if cell.is_marked {
            self.marked_count += 1;
        } else {
            self.marked_count -= 1;
        }
        cell.is_marked
    }

    /// Drops the mark on a cell, if any, before it gets shown.
    pub(crate) fn clear_mark(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_marked {
            cell.is_marked = false;
            self.marked_count -= 1;
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_covered_and_empty() {
        let board = Board::new(4);

        assert_eq!(board.size(), 4);
        assert_eq!(board.total_cells(), 16);
        assert_eq!(board.mine_count(), 0);
        assert!(board.iter_cells().all(|(_, cell)| *cell == Cell::default()));
    }

    #[test]
    fn get_returns_none_out_of_bounds() {
        let board = Board::new(3);

        assert!(board.get((2, 2)).is_some());
        assert!(board.get((3, 0)).is_none());
        assert!(board.get((0, 3)).is_none());
        assert_eq!(
            board.validate_coords((0, 7)),
            Err(GameError::OutOfBounds((0, 7)))
        );
    }

    #[test]
    fn counters_track_mutations() {
        let mut board = Board::new(2);

        assert!(board.set_mine((0, 0)));
        assert!(!board.set_mine((0, 0)));
        assert_eq!(board.mine_count(), 1);

        assert!(board.show((0, 1)));
        assert!(!board.show((0, 1)));
        assert!(board.show((0, 0)));
        assert_eq!(board.shown_safe_count(), 1);

        assert!(board.flip_mark((1, 1)));
        assert_eq!(board.marked_count(), 1);
        assert!(!board.flip_mark((1, 1)));
        assert_eq!(board.marked_count(), 0);

        board.flip_mark((1, 0));
        board.clear_mark((1, 0));
        board.clear_mark((1, 0));
        assert!(!board[(1, 0)].is_marked);
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn iter_cells_is_row_major() {
        let board = Board::new(2);
        let coords: alloc::vec::Vec<_> = board.iter_cells().map(|(pos, _)| pos).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}

use serde::{Deserialize, Serialize};

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Places mines on a freshly created board.
pub trait MineGenerator {
    fn place_mines(self, board: &mut Board) -> Result<()>;
}

/// How much protection the first revealed cell gets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartTile {
    /// No protection, the first cell may be a mine.
    Random,
    /// The first cell is never a mine.
    #[default]
    SimpleSafe,
    /// The first cell and all of its neighbors are mine-free.
    AlwaysZero,
}

/// Sets `mines_around` on every cell from the current mine placement.
///
/// Must run once after all mines are placed and before the first reveal.
pub fn compute_adjacency_counts(board: &mut Board) {
    let size = board.size();
    for i in 0..size {
        for j in 0..size {
            let coords = (i, j);
            // a cell has at most 8 neighbors
            let count = board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos].is_mine)
                .count() as u8;
            board.set_mines_around(coords, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts mines around `coords` with signed offsets, independent of `NeighborIter`.
    fn brute_force_count(board: &Board, (i, j): Coord2) -> u8 {
        let mut count = 0;
        for di in -1i16..=1 {
            for dj in -1i16..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }
                let (ni, nj) = (i16::from(i) + di, i16::from(j) + dj);
                if ni < 0 || nj < 0 {
                    continue;
                }
                if let Some(cell) = board.get((ni as Coord, nj as Coord)) {
                    count += u8::from(cell.is_mine);
                }
            }
        }
        count
    }

    #[test]
    fn adjacency_counts_match_brute_force() {
        let mut board = Board::new(4);
        FixedMineGenerator::new(&[(0, 0), (1, 1), (2, 2)])
            .place_mines(&mut board)
            .unwrap();

        compute_adjacency_counts(&mut board);

        for (coords, cell) in board.iter_cells() {
            assert_eq!(cell.mines_around, brute_force_count(&board, coords), "{coords:?}");
        }
        assert_eq!(board[(0, 1)].mines_around, 2);
        assert_eq!(board[(3, 0)].mines_around, 0);
        assert_eq!(board[(3, 3)].mines_around, 1);
    }

    #[test]
    fn adjacency_counts_on_dense_random_board() {
        let mut board = Board::new(9);
        RandomMineGenerator::new(7, 60).place_mines(&mut board).unwrap();

        compute_adjacency_counts(&mut board);

        for (coords, cell) in board.iter_cells() {
            assert_eq!(cell.mines_around, brute_force_count(&board, coords), "{coords:?}");
        }
    }
}

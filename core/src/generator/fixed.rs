use alloc::vec::Vec;

use super::*;

/// Places mines at exactly the given coordinates, duplicates collapse into one.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedMineGenerator<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl MineGenerator for FixedMineGenerator<'_> {
    fn place_mines(self, board: &mut Board) -> Result<()> {
        let mut distinct: Vec<Coord2> = Vec::with_capacity(self.mines.len());
        for &coords in self.mines {
            let coords = board.validate_coords(coords)?;
            if !board[coords].is_mine && !distinct.contains(&coords) {
                distinct.push(coords);
            }
        }

        let max = board.total_cells().saturating_sub(1);
        let mines = board.mine_count() + distinct.len() as CellCount;
        if mines > max {
            return Err(GameError::TooManyMines { mines, max });
        }

        for coords in distinct {
            board.set_mine(coords);
        }
        log::debug!("Placed {} fixed mines", board.mine_count());
        Ok(())
    }
}

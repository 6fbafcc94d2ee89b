use alloc::vec::Vec;

use super::*;

/// Generation strategy that can optionally keep the starting cell safe or zero, but other than that is
/// purely random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    mine_count: CellCount,
    start: Option<Coord2>,
    start_tile: StartTile,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, mine_count: CellCount) -> Self {
        Self {
            seed,
            mine_count,
            start: None,
            start_tile: StartTile::Random,
        }
    }

    /// Protects `start` according to `start_tile`.
    pub fn with_start(self, start: Coord2, start_tile: StartTile) -> Self {
        Self {
            start: Some(start),
            start_tile,
            ..self
        }
    }

    /// Picks the strongest policy the board can honor.
    fn effective_start_tile(&self, zero_area: CellCount, free_cells: CellCount) -> StartTile {
        use StartTile::*;

        match self.start_tile {
            Random => Random,
            SimpleSafe => SimpleSafe,
            AlwaysZero if self.mine_count + zero_area > free_cells => {
                log::warn!("Cannot make start cell zero, fallback to simple safe");
                SimpleSafe
            }
            AlwaysZero => AlwaysZero,
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place_mines(self, board: &mut Board) -> Result<()> {
        use rand::prelude::*;
        use StartTile::*;

        let free_cells = board.total_cells() - board.mine_count();
        // at least one safe cell must remain
        let max = free_cells.saturating_sub(1);
        if self.mine_count > max {
            return Err(GameError::TooManyMines {
                mines: self.mine_count,
                max,
            });
        }

        let mut reserved: Vec<Coord2> = Vec::new();
        if let Some(start) = self.start {
            let start = board.validate_coords(start)?;
            let zero_area = 1 + board.iter_neighbors(start).count() as CellCount;
            match self.effective_start_tile(zero_area, free_cells) {
                Random => {}
                SimpleSafe => reserved.push(start),
                AlwaysZero => {
                    reserved.push(start);
                    reserved.extend(board.iter_neighbors(start));
                }
            }
        }

        let mut candidates: Vec<Coord2> = board
            .iter_cells()
            .filter(|(coords, cell)| !cell.is_mine && !reserved.contains(coords))
            .map(|(coords, _)| coords)
            .collect();

        // partial Fisher-Yates, the first `mine_count` slots end up uniformly chosen
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for placed in 0..usize::from(self.mine_count) {
            let pick = rng.random_range(placed..candidates.len());
            candidates.swap(placed, pick);
            board.set_mine(candidates[placed]);
        }

        log::debug!(
            "Placed {} mines with seed {:#x}, {} cells kept safe",
            self.mine_count,
            self.seed,
            reserved.len()
        );
        Ok(())
    }
}

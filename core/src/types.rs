/// Single coordinate axis used for the board side and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(i, j)`, row first.
pub type Coord2 = (Coord, Coord);

/// Number of lives a player has left.
pub type Lives = u8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of a square board with side `size`.
pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Walks the in-bounds Moore neighbors of a cell row by row, never the cell itself.
///
/// The 3x3 window around the center is clamped to the board once, so no
/// coordinate outside `bounds` is ever produced.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_col: Coord,
    last_row: Coord,
    last_col: Coord,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, (rows, cols): Coord2) -> Self {
        let (i, j) = center;
        let window = rows
            .checked_sub(1)
            .zip(cols.checked_sub(1))
            .map(|(max_i, max_j)| {
                (
                    (i.saturating_sub(1), i.saturating_add(1).min(max_i)),
                    (j.saturating_sub(1), j.saturating_add(1).min(max_j)),
                )
            })
            .filter(|((first_i, last_i), (first_j, last_j))| {
                first_i <= last_i && first_j <= last_j
            });

        match window {
            Some(((first_row, last_row), (first_col, last_col))) => Self {
                center,
                first_col,
                last_row,
                last_col,
                cursor: Some((first_row, first_col)),
            },
            None => Self {
                center,
                first_col: 0,
                last_row: 0,
                last_col: 0,
                cursor: None,
            },
        }
    }

    fn advance(&mut self, (i, j): Coord2) {
        self.cursor = if j < self.last_col {
            Some((i, j + 1))
        } else if i < self.last_row {
            Some((i + 1, self.first_col))
        } else {
            None
        };
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.cursor?;
            self.advance(current);
            if current != self.center {
                return Some(current);
            }
        }
    }
}

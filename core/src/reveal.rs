use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Reveals a single covered cell, flooding outwards when it has no mines around.
///
/// Shown and marked cells are left untouched and report [`RevealOutcome::NoOp`].
/// A mine is shown as exploded and nothing else is revealed.
pub fn reveal_cell(board: &mut Board, coords: Coord2) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;
    let cell = board[coords];

    if cell.is_shown || cell.is_marked {
        return Ok(RevealOutcome::NoOp);
    }

    board.show(coords);
    log::debug!("Reveal cell at {:?}, mines around: {}", coords, cell.mines_around);

    Ok(if cell.is_mine {
        RevealOutcome::HitMine
    } else if cell.mines_around == 0 {
        flood_expand(board, coords);
        RevealOutcome::OpenedAndExpanded
    } else {
        RevealOutcome::Opened(cell.mines_around)
    })
}

/// Shows the zero-count region connected to `start` together with its numbered border.
///
/// Uses an explicit stack and a visited grid scoped to this call. Mines are
/// never shown, numbered cells are shown but not expanded. A marked safe cell
/// reached by the flood loses its mark and is shown like any other.
/// Returns how many cells were newly shown.
pub fn flood_expand(board: &mut Board, start: Coord2) -> CellCount {
    let side = usize::from(board.size());
    let mut visited: Array2<bool> = Array2::default([side, side]);
    let mut to_visit: Vec<Coord2> = Vec::from([start]);
    let mut newly_shown: CellCount = 0;

    while let Some(visit_coords) = to_visit.pop() {
        if core::mem::replace(&mut visited[visit_coords.to_nd_index()], true) {
            continue;
        }

        let cell = board[visit_coords];
        if cell.is_mine {
            continue;
        }

        if cell.is_marked {
            board.clear_mark(visit_coords);
        }

        if board.show(visit_coords) {
            newly_shown += 1;
            log::trace!(
                "Flood shown cell at {:?}, mines around: {}",
                visit_coords,
                cell.mines_around
            );
        }

        // numbered cells form the border of the region
        if cell.mines_around > 0 {
            continue;
        }

        to_visit.extend(
            board
                .iter_neighbors(visit_coords)
                .filter(|&pos| !visited[pos.to_nd_index()] && !board[pos].is_shown),
        );
    }

    newly_shown
}

/// Flips the mark on a covered cell, shown cells cannot be marked.
pub fn toggle_mark(board: &mut Board, coords: Coord2) -> Result<MarkOutcome> {
    let coords = board.validate_coords(coords)?;

    if board[coords].is_shown {
        return Ok(MarkOutcome::NoOp);
    }

    Ok(if board.flip_mark(coords) {
        MarkOutcome::Marked
    } else {
        MarkOutcome::Unmarked
    })
}

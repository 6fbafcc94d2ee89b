use std::fmt::Write;

use lifesweeper_core::{GameState, Snapshot, Tile};

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Covered => '#',
        Tile::Marked => 'F',
        Tile::Open(0) => '.',
        Tile::Open(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        Tile::Exploded => '*',
        Tile::Mine => 'x',
        Tile::WrongMark => '!',
    }
}

/// Draws the board with row and column indices, followed by a status line.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let width = snapshot.size.saturating_sub(1).to_string().len();

    let _ = write!(out, "{:width$} ", "");
    for j in 0..snapshot.size {
        let _ = write!(out, " {j:>width$}");
    }
    out.push('\n');

    for (i, row) in snapshot.tiles.rows().into_iter().enumerate() {
        let _ = write!(out, "{i:>width$} ");
        for &tile in row {
            let _ = write!(out, " {:>width$}", glyph(tile));
        }
        out.push('\n');
    }

    let state = match snapshot.state {
        GameState::NotStarted => "reveal a cell to start",
        GameState::Running => "running",
        GameState::Won => "you won!",
        GameState::Lost => "game over",
    };
    let _ = writeln!(
        out,
        "lives: {}  mines left: {}  {}",
        snapshot.lives_remaining,
        snapshot.mines_left(),
        state
    );
    out
}

use std::str::FromStr;

use lifesweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Mark(Coord2),
    NewGame,
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("Expected two coordinates: row and column")]
    MissingCoords,
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
}

pub const HELP: &str = "\
commands:
  r <row> <col>   reveal a cell
  m <row> <col>   toggle a mark
  n               new game
  s               restart the same game
  h               show this help
  q               quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        let command = match verb {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "m" | "mark" => Self::Mark(parse_coords(&mut words)?),
            "n" | "new" => Self::NewGame,
            "s" | "restart" => Self::Restart,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words.next().ok_or(CommandError::MissingCoords)?;
        word.parse()
            .map_err(|_| CommandError::InvalidCoord(word.to_owned()))
    };
    Ok((next()?, next()?))
}

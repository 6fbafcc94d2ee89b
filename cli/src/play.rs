use lifesweeper_core::{GameConfig, GameSession, MarkOutcome, Result, RevealOutcome};

use crate::command::{Command, HELP};

/// Drives one session from parsed commands, nothing here knows about stdin.
pub struct Play {
    config: GameConfig,
    fixed_seed: Option<u64>,
    session: GameSession,
}

impl Play {
    pub fn new(config: GameConfig, fixed_seed: Option<u64>) -> Result<Self> {
        let seed = fixed_seed.unwrap_or_else(rand::random);
        log::info!("Starting game with seed {seed}");
        Ok(Self {
            config,
            fixed_seed,
            session: GameSession::new(config, seed)?,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Applies a command and returns a message for the player, if any.
    ///
    /// [`Command::Quit`] is handled by the caller.
    pub fn handle(&mut self, command: Command) -> Result<Option<&'static str>> {
        let message = match command {
            Command::Reveal(coords) => match self.session.reveal_cell(coords)? {
                RevealOutcome::NoOp => Some("Nothing to reveal there"),
                RevealOutcome::HitMine if self.session.is_finished() => Some("Boom! No lives left"),
                RevealOutcome::HitMine => Some("Boom! You lost a life"),
                RevealOutcome::Opened(_) | RevealOutcome::OpenedAndExpanded => None,
            },
            Command::Mark(coords) => match self.session.toggle_mark(coords)? {
                MarkOutcome::NoOp => Some("That cell cannot be marked right now"),
                MarkOutcome::Marked | MarkOutcome::Unmarked => None,
            },
            Command::NewGame => {
                let seed = self.fixed_seed.unwrap_or_else(rand::random);
                log::info!("New game with seed {seed}");
                self.session.new_game(self.config, seed)?;
                None
            }
            Command::Restart => {
                self.session.restart()?;
                None
            }
            Command::Help => Some(HELP),
            Command::Quit => None,
        };
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifesweeper_core::{GameError, GameState};

    #[test]
    fn fixed_seed_repeats_across_new_games() {
        let config = GameConfig::beginner();
        let mut play = Play::new(config, Some(21)).unwrap();
        play.handle(Command::Reveal((4, 4))).unwrap();
        let first = play.session().clone();

        play.handle(Command::NewGame).unwrap();
        assert_eq!(play.session().state(), GameState::NotStarted);
        play.handle(Command::Reveal((4, 4))).unwrap();

        assert_eq!(play.session(), &first);
    }

    #[test]
    fn marks_before_start_are_refused() {
        let mut play = Play::new(GameConfig::default(), Some(1)).unwrap();

        let message = play.handle(Command::Mark((0, 0))).unwrap();

        assert_eq!(message, Some("That cell cannot be marked right now"));
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut play = Play::new(GameConfig::default(), Some(1)).unwrap();

        assert_eq!(
            play.handle(Command::Reveal((9, 9))),
            Err(GameError::OutOfBounds((9, 9)))
        );
    }
}

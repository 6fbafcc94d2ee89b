use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Running
/// - Running -> Won
/// - Running -> Lost
///
/// A new game resets any state back to `NotStarted`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No cell revealed yet, mines may not be placed
    #[default]
    NotStarted,
    Running,
    /// Every safe cell is shown
    Won,
    /// No lives left
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Where a session takes its mines from once the first cell is revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MineSource {
    Random { seed: u64 },
    Fixed(Vec<Coord2>),
}

/// One game from first click to win or loss, owned by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    source: MineSource,
    board: Board,
    state: GameState,
    lives_remaining: Lives,
    mines_placed: bool,
}

impl GameSession {
    /// Starts a game whose mines are placed randomly on the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, MineSource::Random { seed })
    }

    /// Starts a game with mines at fixed coordinates, placed on the first reveal.
    pub fn with_mines(size: Coord, lives: Lives, mines: &[Coord2]) -> Result<Self> {
        let mut mines = mines.to_vec();
        mines.sort_unstable();
        mines.dedup();
        let mine_count = mines.len().try_into().unwrap_or(CellCount::MAX);
        let config = GameConfig::new(size, mine_count, lives)?;
        // reject bad coordinates now rather than on the first click
        FixedMineGenerator::new(&mines).place_mines(&mut Board::new(size))?;
        Self::with_source(config, MineSource::Fixed(mines))
    }

    fn with_source(config: GameConfig, source: MineSource) -> Result<Self> {
        let config = config.validate()?;
        log::debug!(
            "New {}x{} game with {} mines and {} lives",
            config.size,
            config.size,
            config.mines,
            config.lives
        );
        Ok(Self {
            config,
            source,
            board: Board::new(config.size),
            state: GameState::NotStarted,
            lives_remaining: config.lives,
            mines_placed: false,
        })
    }

    /// Throws the current board away and starts over with a fresh random one.
    ///
    /// The session is left untouched when `config` is rejected.
    pub fn new_game(&mut self, config: GameConfig, seed: u64) -> Result<()> {
        *self = Self::new(config, seed)?;
        Ok(())
    }

    /// Starts the same game again, with the same seed or fixed mines.
    pub fn restart(&mut self) -> Result<()> {
        *self = Self::with_source(self.config, self.source.clone())?;
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn lives_remaining(&self) -> Lives {
        self.lives_remaining
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How many mines have not been marked yet, negative when over-marked.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.board.marked_count())
    }

    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        match self.state {
            GameState::Won | GameState::Lost => return Ok(RevealOutcome::NoOp),
            GameState::NotStarted => self.start(coords)?,
            GameState::Running => {}
        }

        let outcome = reveal::reveal_cell(&mut self.board, coords)?;
        self.settle(outcome);
        Ok(outcome)
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state != GameState::Running {
            return Ok(MarkOutcome::NoOp);
        }

        reveal::toggle_mark(&mut self.board, coords)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    /// Places mines around the first clicked cell and enters `Running`.
    fn start(&mut self, first: Coord2) -> Result<()> {
        if !self.mines_placed {
            match &self.source {
                MineSource::Random { seed } => {
                    RandomMineGenerator::new(*seed, self.config.mines)
                        .with_start(first, self.config.start_tile)
                        .place_mines(&mut self.board)?;
                }
                MineSource::Fixed(mines) => {
                    FixedMineGenerator::new(mines).place_mines(&mut self.board)?;
                }
            }
            compute_adjacency_counts(&mut self.board);
            self.mines_placed = true;
        }

        self.state = GameState::Running;
        log::debug!("Game started at {:?}", first);
        Ok(())
    }

    /// Applies the consequences of a reveal to lives and state.
    fn settle(&mut self, outcome: RevealOutcome) {
        if outcome == RevealOutcome::HitMine {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            log::debug!("Mine hit, {} lives remaining", self.lives_remaining);

            if self.lives_remaining == 0 {
                self.end_game(false);
                return;
            }
        }

        if self.board.all_safe_shown() {
            self.end_game(true);
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("Game ended: {:?}", self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal_session(lives: Lives) -> GameSession {
        GameSession::with_mines(4, lives, &[(0, 0), (1, 1), (2, 2)]).unwrap()
    }

    #[test]
    fn mines_wait_for_first_reveal() {
        let mut session = GameSession::new(GameConfig::default(), 9).unwrap();

        assert_eq!(session.state(), GameState::NotStarted);
        assert!(!session.mines_placed());
        assert_eq!(session.board().mine_count(), 0);

        session.reveal_cell((2, 2)).unwrap();

        assert_eq!(session.state(), GameState::Running);
        assert!(session.mines_placed());
        assert_eq!(session.board().mine_count(), 3);
    }

    #[test]
    fn first_reveal_is_safe_by_default() {
        for seed in 0..100 {
            let config = GameConfig::new(3, 8, 1).unwrap();
            let mut session = GameSession::new(config, seed).unwrap();

            let outcome = session.reveal_cell((0, 0)).unwrap();

            assert_eq!(outcome, RevealOutcome::Opened(3));
            assert_eq!(session.state(), GameState::Won);
        }
    }

    #[test]
    fn mark_is_rejected_before_start() {
        let mut session = diagonal_session(3);

        assert_eq!(session.toggle_mark((3, 3)).unwrap(), MarkOutcome::NoOp);
        assert_eq!(session.board().marked_count(), 0);
    }

    #[test]
    fn hit_mine_costs_one_life() {
        let mut session = diagonal_session(3);

        assert_eq!(session.reveal_cell((1, 1)).unwrap(), RevealOutcome::HitMine);

        assert_eq!(session.lives_remaining(), 2);
        assert_eq!(session.state(), GameState::Running);
        assert!(session.board()[(1, 1)].is_shown);
    }

    #[test]
    fn last_life_loses_and_freezes() {
        let mut session = diagonal_session(2);

        session.reveal_cell((0, 0)).unwrap();
        session.reveal_cell((1, 1)).unwrap();

        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.lives_remaining(), 0);

        let before = session.clone();
        assert_eq!(session.reveal_cell((2, 2)).unwrap(), RevealOutcome::NoOp);
        assert_eq!(session.reveal_cell((3, 3)).unwrap(), RevealOutcome::NoOp);
        assert_eq!(session.toggle_mark((3, 3)).unwrap(), MarkOutcome::NoOp);
        assert_eq!(session, before);
    }

    #[test]
    fn showing_every_safe_cell_wins() {
        let mut session = diagonal_session(3);

        for coords in [(3, 0), (0, 3), (0, 1), (1, 0), (0, 2), (1, 3), (2, 3), (3, 2)] {
            session.reveal_cell(coords).unwrap();
            assert_eq!(session.state(), GameState::Running, "{coords:?}");
        }
        session.reveal_cell((3, 3)).unwrap();

        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.reveal_cell((0, 0)).unwrap(), RevealOutcome::NoOp);
        assert_eq!(session.lives_remaining(), 3);
    }

    #[test]
    fn exploded_mines_do_not_count_towards_win() {
        let mut session = GameSession::with_mines(2, 3, &[(0, 0)]).unwrap();

        session.reveal_cell((0, 0)).unwrap();
        session.reveal_cell((0, 1)).unwrap();
        session.reveal_cell((1, 0)).unwrap();
        assert_eq!(session.state(), GameState::Running);

        session.reveal_cell((1, 1)).unwrap();
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.lives_remaining(), 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            GameSession::with_mines(2, 1, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
            Err(GameError::TooManyMines { mines: 4, max: 3 })
        );
        assert_eq!(
            GameSession::with_mines(2, 0, &[(0, 0)]),
            Err(GameError::NoLives)
        );
        assert_eq!(
            GameSession::with_mines(2, 1, &[(2, 0)]),
            Err(GameError::OutOfBounds((2, 0)))
        );
    }

    #[test]
    fn new_game_replaces_board() {
        let mut session = diagonal_session(1);
        session.reveal_cell((1, 1)).unwrap();
        assert_eq!(session.state(), GameState::Lost);

        session.new_game(GameConfig::beginner(), 5).unwrap();

        assert_eq!(session.state(), GameState::NotStarted);
        assert_eq!(session.board().size(), 9);
        assert_eq!(session.lives_remaining(), 3);
        assert_eq!(session.board().shown_safe_count(), 0);
    }

    #[test]
    fn rejected_new_game_keeps_session() {
        let mut session = diagonal_session(3);
        session.reveal_cell((3, 3)).unwrap();
        let before = session.clone();

        let config = GameConfig {
            mines: 16,
            ..GameConfig::default()
        };

        assert!(session.new_game(config, 1).unwrap_err().is_invalid_config());
        assert_eq!(session, before);
    }

    #[test]
    fn restart_replays_fixed_mines() {
        let mut session = diagonal_session(3);
        session.reveal_cell((3, 3)).unwrap();

        session.restart().unwrap();
        session.reveal_cell((3, 0)).unwrap();

        assert_eq!(session.board().mine_count(), 3);
        assert!(session.board()[(1, 1)].is_mine);
        assert!(!session.board()[(3, 3)].is_shown);
    }

    #[test]
    fn mines_left_counts_marks() {
        let mut session = diagonal_session(3);
        session.reveal_cell((3, 3)).unwrap();

        session.toggle_mark((0, 0)).unwrap();
        session.toggle_mark((0, 3)).unwrap();
        session.toggle_mark((1, 3)).unwrap();
        session.toggle_mark((2, 3)).unwrap();

        assert_eq!(session.mines_left(), -1);
    }
}

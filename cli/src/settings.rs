use std::{fs, path::Path};

use anyhow::Context;
use lifesweeper_core::{CellCount, Coord, GameConfig, Lives, StartTile};
use serde::Deserialize;

/// Game parameters that can come from the command line or a TOML file.
///
/// Unset fields fall through to the next layer and finally to
/// [`GameConfig::default`].
#[derive(clap::Args, Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Side length of the square board
    #[arg(long)]
    pub size: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Mines the player may hit before losing
    #[arg(short, long)]
    pub lives: Option<Lives>,

    /// First click protection: random, simple-safe or always-zero
    #[arg(long, value_parser = parse_start_tile)]
    pub start_tile: Option<StartTile>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    /// Fills every unset field from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            size: self.size.or(fallback.size),
            mines: self.mines.or(fallback.mines),
            lives: self.lives.or(fallback.lives),
            start_tile: self.start_tile.or(fallback.start_tile),
            seed: self.seed.or(fallback.seed),
        }
    }

    pub fn game_config(&self) -> lifesweeper_core::Result<GameConfig> {
        let defaults = GameConfig::default();
        let config = GameConfig::new(
            self.size.unwrap_or(defaults.size),
            self.mines.unwrap_or(defaults.mines),
            self.lives.unwrap_or(defaults.lives),
        )?;
        Ok(config.with_start_tile(self.start_tile.unwrap_or(defaults.start_tile)))
    }
}

fn parse_start_tile(value: &str) -> Result<StartTile, String> {
    match value {
        "random" => Ok(StartTile::Random),
        "simple-safe" => Ok(StartTile::SimpleSafe),
        "always-zero" => Ok(StartTile::AlwaysZero),
        other => Err(format!(
            "unknown start tile `{other}`, expected random, simple-safe or always-zero"
        )),
    }
}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use command::{Command, HELP};
use play::Play;
use render::render;
use settings::Settings;

mod command;
mod play;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper with lives, played from the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with default game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    settings: Settings,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = args.settings.or(file_settings);
    let config = settings
        .game_config()
        .context("Invalid game settings")?;
    log::debug!("config: {:?}", config);

    let mut play = Play::new(config, settings.seed)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}\n")?;
    write!(out, "{}", render(&play.session().snapshot()))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => match play.handle(command) {
                Ok(message) => {
                    if let Some(message) = message {
                        writeln!(out, "{message}")?;
                    }
                    write!(out, "{}", render(&play.session().snapshot()))?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Err(err) => writeln!(out, "{err}")?,
        }
        out.flush()?;
    }

    Ok(())
}

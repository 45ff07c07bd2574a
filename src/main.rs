use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use connect4::config::AppConfig;
use connect4::game::{CellValue, Event, Game};
use connect4::history::HistoryStore;
use connect4::ui::{outcome_message, print_board, GameSummary};

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
enum PlayerArg {
    #[value(alias = "o")]
    O,
    #[value(alias = "x")]
    X,
}

impl From<PlayerArg> for CellValue {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::O => CellValue::O,
            PlayerArg::X => CellValue::X,
        }
    }
}

/// Play one move of a Connect Four game persisted in a history file.
#[derive(Parser)]
#[command(name = "connect4", about = "Play one move of a persistent Connect Four game")]
struct Cli {
    /// Player making the move
    #[arg(value_enum)]
    player: PlayerArg,

    /// Column to drop the piece into
    #[arg(value_parser = clap::value_parser!(u8).range(0..=6))]
    column: u8,

    /// Apply the move without writing the history back (debugging)
    #[arg(long)]
    dry_run: bool,

    /// Print the board after the move
    #[arg(short, long)]
    print: bool,

    /// Print a JSON summary of the game
    #[arg(long)]
    json: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the history file from the configuration
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.history {
        config.history.path = path;
        config.validate()?;
    }

    let store = HistoryStore::new(&config.history.path);
    let mut history = store
        .load()
        .with_context(|| format!("loading history from {}", store.path().display()))?;

    let event = Event::play(cli.player.into(), usize::from(cli.column));
    history.push(event);
    tracing::info!(%event, moves = history.len(), "replaying history");

    let game = Game::from_history(&history).context("replaying history")?;

    if cli.dry_run {
        tracing::info!("dry run, history not saved");
    } else {
        store
            .save(game.history())
            .with_context(|| format!("saving history to {}", store.path().display()))?;
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", GameSummary::from_game(&game).to_json()?)?;
    }
    if cli.print {
        print_board(&mut stdout, game.grid(), &config.display)?;
    }
    if let Some(message) = outcome_message(game.state()) {
        writeln!(stdout, "\n   {message}\n")?;
    }

    Ok(())
}

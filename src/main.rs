//! Quadline - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use quadline::{Console, ConsoleError, GameConfig, Session, TextConsole};
use std::path::Path;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    run_game(config)
}

/// Sends logs to stderr, or to a file when one is given, keeping stdout for the game.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Reads the config file if given, then applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(name) = &cli.player_one {
        config = config.with_player_one(name.as_str());
    }
    if let Some(name) = &cli.player_two {
        config = config.with_player_two(name.as_str());
    }
    if let Some(first) = cli.first {
        config = config.with_first_player(first);
    }

    config.validate()?;
    Ok(config)
}

/// Runs rounds on stdin/stdout until the players quit.
#[instrument(skip(config))]
fn run_game(config: GameConfig) -> Result<()> {
    info!("Starting quadline");

    let mut session = Session::new(*config.first_player());
    let mut console = TextConsole::stdio(config);

    match session.run(&mut console) {
        Ok(score) => info!(rounds = score.rounds(), "Players quit"),
        Err(ConsoleError::InputClosed) => {
            warn!(rounds = session.score().rounds(), "Input closed mid-round");
        }
        Err(e) => return Err(e.into()),
    }

    console.report_farewell()?;
    Ok(())
}

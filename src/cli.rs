//! Command-line interface for quadline.

use clap::{Parser, ValueEnum};
use quadline::Player;
use std::path::PathBuf;

/// Quadline - two players, a 4x4 board, four in a line wins
#[derive(Parser, Debug)]
#[command(name = "quadline")]
#[command(about = "Two-player 4x4 line-completion game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with player labels and preferences
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Label for player 1 (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Label for player 2 (O)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Player who opens the first round
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Which player opens the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    /// Player 1 (X)
    One,
    /// Player 2 (O)
    Two,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::One => Player::Player1,
            FirstPlayer::Two => Player::Player2,
        }
    }
}

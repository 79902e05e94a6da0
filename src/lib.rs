//! Quadline library - two-player line-completion on a 4x4 board
//!
//! Players take turns marking cells 1-16 (X for player 1, O for player 2).
//! Completing a row, column or diagonal wins the round; a full board with no
//! complete line is a tie. Sessions repeat rounds, alternate the opener and
//! keep a running score.
//!
//! # Architecture
//!
//! - **Board / Rules**: pure game state and checks ([`Board`], [`rules`])
//! - **Round**: turn-by-turn state machine ([`Round`], [`play_round`])
//! - **Session**: repeated rounds and scoring ([`Session`], [`Score`])
//! - **Console**: the terminal boundary ([`Console`], [`TextConsole`])
//!
//! # Example
//!
//! ```no_run
//! use quadline::{GameConfig, Session, TextConsole};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let mut session = Session::new(*config.first_player());
//! let mut console = TextConsole::stdio(config);
//! let score = session.run(&mut console)?;
//! println!("{} rounds played", score.rounds());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal boundary
pub use console::{Console, ConsoleError, TextConsole};

// Crate-level exports - Session management
pub use session::Session;

// Crate-level exports - Game types
pub use games::quadline::{
    Board, CELLS, Cell, Mark, Move, MoveError, Outcome, Player, Position, Round, RoundState,
    SIDE, Score, play_round, rules,
};

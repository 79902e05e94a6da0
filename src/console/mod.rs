//! Terminal boundary between the game engine and the person at the keyboard.
//!
//! The engine talks to a [`Console`] only through the requests below, so
//! rounds and sessions can be driven by scripted consoles in tests.

mod error;
mod text;

pub use error::ConsoleError;
pub use text::TextConsole;

use crate::games::quadline::{Board, MoveError, Outcome, Player, Score};

/// Renders game state and collects moves and commands.
pub trait Console {
    /// Asks `player` for a move.
    ///
    /// Returns only syntactically valid integers; range and occupancy are
    /// checked by the engine.
    fn prompt_move(&mut self, player: Player) -> Result<i64, ConsoleError>;

    /// Tells `player` their move was refused before asking again.
    fn reject_move(
        &mut self,
        player: Player,
        raw: i64,
        reason: &MoveError,
    ) -> Result<(), ConsoleError>;

    /// Shows all 16 cells.
    fn render_board(&mut self, board: &Board) -> Result<(), ConsoleError>;

    /// Announces how a round ended.
    fn report_outcome(&mut self, outcome: Outcome) -> Result<(), ConsoleError>;

    /// Shows the running totals.
    fn report_scores(&mut self, score: &Score) -> Result<(), ConsoleError>;

    /// Asks whether to play another round.
    fn prompt_continue(&mut self) -> Result<bool, ConsoleError>;

    /// Says goodbye.
    fn report_farewell(&mut self) -> Result<(), ConsoleError>;
}

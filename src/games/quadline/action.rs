//! First-class move types for quadline.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.player, self.player.mark(), self.position)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The number does not name a cell.
    #[display("Position {} is outside 1-16", _0)]
    OutOfRange(i64),

    /// The cell already holds a mark.
    #[display("Position {} is already taken", _0)]
    CellOccupied(Position),

    /// The round already has an outcome.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

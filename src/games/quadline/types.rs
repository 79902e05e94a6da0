//! Core domain types for quadline.

use super::action::MoveError;
use super::position::{Position, SIDE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player places on a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Mark of the first player.
    #[display("X")]
    X,
    /// Mark of the second player.
    #[display("O")]
    O,
}

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player 1, plays X.
    #[display("Player 1")]
    #[serde(rename = "one")]
    Player1,
    /// Player 2, plays O.
    #[display("Player 2")]
    #[serde(rename = "two")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Returns the mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::Player1 => Mark::X,
            Player::Player2 => Mark::O,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell. Displays its own position number.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 4x4 board, addressed internally by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIDE]; SIDE];
    }

    /// Gets the cell at a position.
    pub fn mark_at(&self, pos: Position) -> Cell {
        let (row, col) = pos.coords();
        self.cells[row][col]
    }

    /// Gets the cell at internal coordinates, or `None` off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if the cell at a position already holds a mark.
    pub fn is_occupied(&self, pos: Position) -> bool {
        !self.mark_at(pos).is_empty()
    }

    /// Places a mark on an empty cell.
    ///
    /// Marked cells are never overwritten within a round.
    #[instrument(skip(self))]
    pub fn set_mark(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if self.is_occupied(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        let (row, col) = pos.coords();
        self.cells[row][col] = Cell::Occupied(mark);
        Ok(())
    }

    /// Positions that are still open.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|pos| !self.is_occupied(*pos)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const RULE: &str = "-------------";
        writeln!(f, "{RULE}")?;
        for pos in Position::all() {
            match self.mark_at(pos) {
                Cell::Empty => write!(f, "\t{pos}")?,
                Cell::Occupied(mark) => write!(f, "\t{mark}")?,
            }
            if pos.coords().1 == SIDE - 1 {
                writeln!(f)?;
            }
        }
        writeln!(f, "{RULE}")
    }
}

//! External cell addressing for the 4x4 board.
//!
//! Players name cells 1-16 in row-major order; the board stores them by
//! `(row, col)`. This module owns the only conversion between the two.

use serde::{Deserialize, Serialize};

/// Cells per row and per column.
pub const SIDE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A position on the board (1-16).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Position(u8);

impl Position {
    /// Creates a position from its external number, `None` outside 1-16.
    pub fn new(raw: i64) -> Option<Self> {
        if (1..=CELLS as i64).contains(&raw) {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// Creates a position from internal coordinates.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Some(Self((row * SIDE + col + 1) as u8))
        } else {
            None
        }
    }

    /// Returns `(row, col)`, both 0-based.
    pub fn coords(self) -> (usize, usize) {
        let index = usize::from(self.0) - 1;
        (index / SIDE, index % SIDE)
    }

    /// Returns the external number (1-16).
    pub fn number(self) -> u8 {
        self.0
    }

    /// All 16 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=CELLS as u8).map(Position)
    }
}

impl TryFrom<i64> for Position {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Position::new(raw).ok_or_else(|| format!("position {raw} is outside 1-{CELLS}"))
    }
}

impl From<Position> for i64 {
    fn from(pos: Position) -> Self {
        i64::from(pos.0)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_mapping() {
        assert_eq!(Position::new(1).map(Position::coords), Some((0, 0)));
        assert_eq!(Position::new(4).map(Position::coords), Some((0, 3)));
        assert_eq!(Position::new(5).map(Position::coords), Some((1, 0)));
        assert_eq!(Position::new(13).map(Position::coords), Some((3, 0)));
        assert_eq!(Position::new(16).map(Position::coords), Some((3, 3)));
    }

    #[test]
    fn test_mapping_is_bijective() {
        for pos in Position::all() {
            let (row, col) = pos.coords();
            assert_eq!((row * SIDE + col + 1) as u8, pos.number());
            assert_eq!(Position::from_coords(row, col), Some(pos));
        }
        assert_eq!(Position::all().count(), CELLS);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Position::new(0), None);
        assert_eq!(Position::new(17), None);
        assert_eq!(Position::new(-1), None);
        assert_eq!(Position::from_coords(4, 0), None);
        assert_eq!(Position::from_coords(0, 4), None);
    }
}

//! Move validation: the single gate in front of every board mutation.

use super::super::{Board, MoveError, Position};
use tracing::instrument;

/// Validates a raw move number against the board.
///
/// # Errors
///
/// `OutOfRange` unless `1 <= raw <= 16`, `CellOccupied` if the cell is taken.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, raw: i64) -> Result<Position, MoveError> {
    let pos = Position::new(raw).ok_or(MoveError::OutOfRange(raw))?;
    if board.is_occupied(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    Ok(pos)
}

/// True iff `raw` names an empty cell.
pub fn is_valid_move(board: &Board, raw: i64) -> bool {
    validate_move(board, raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    #[test]
    fn test_bounds() {
        let board = Board::new();
        assert!(!is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 17));
        assert!(!is_valid_move(&board, -4));
        assert!((1..=16).all(|n| is_valid_move(&board, n)));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new();
        let pos = Position::new(10).expect("in range");
        board.set_mark(pos, Mark::X).unwrap();
        assert!(!is_valid_move(&board, 10));
        assert_eq!(validate_move(&board, 10), Err(MoveError::CellOccupied(pos)));
        assert_eq!(validate_move(&board, 99), Err(MoveError::OutOfRange(99)));
        assert_eq!(validate_move(&board, 11), Position::new(11).ok_or(MoveError::OutOfRange(11)));
    }
}

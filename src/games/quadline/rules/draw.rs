//! Full-board and round-end detection for quadline.

use super::super::{Board, Outcome, Player, Position};
use super::win::has_winner;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Position::all().all(|pos| board.is_occupied(pos))
}

/// A round is over once a line is complete or no cell is left.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    has_winner(board) || is_full(board)
}

/// Classifies the board after `mover` has played.
///
/// Only the player who just moved can have completed a line, so a complete
/// line is credited to `mover`. A complete line wins even on a full board.
#[instrument(skip(board))]
pub fn classify(board: &Board, mover: Player) -> Option<Outcome> {
    if has_winner(board) {
        Some(Outcome::Win(mover))
    } else if is_full(board) {
        Some(Outcome::Tie)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    /// X X O O / O O X X / X X O O / O O X X has no uniform line.
    fn tied_board() -> Board {
        let mut board = Board::new();
        for pos in Position::all() {
            let (row, col) = pos.coords();
            let mark = if (row % 2 == 0) == (col < 2) {
                Mark::X
            } else {
                Mark::O
            };
            board.set_mark(pos, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_game_over(&board));
        assert_eq!(classify(&board, Player::Player1), None);
    }

    #[test]
    fn test_tied_board() {
        let board = tied_board();
        assert!(is_full(&board));
        assert!(!has_winner(&board));
        assert!(is_game_over(&board));
        assert_eq!(classify(&board, Player::Player2), Some(Outcome::Tie));
    }

    #[test]
    fn test_win_beats_tie_on_full_board() {
        // Row 0 all X, the rest in a checkerboard.
        let mut board = Board::new();
        for pos in Position::all() {
            let (row, col) = pos.coords();
            let mark = match row {
                0 => Mark::X,
                _ if (row + col) % 2 == 0 => Mark::O,
                _ => Mark::X,
            };
            board.set_mark(pos, mark).unwrap();
        }
        assert!(is_full(&board));
        assert_eq!(classify(&board, Player::Player1), Some(Outcome::Win(Player::Player1)));
    }
}

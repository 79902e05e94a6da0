//! Line-completion detection for quadline.

use super::super::position::SIDE;
use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Four `(row, col)` coordinates forming a row, column or diagonal.
type Line = [(usize, usize); SIDE];

fn rows() -> impl Iterator<Item = Line> {
    (0..SIDE).map(|row| std::array::from_fn(move |col| (row, col)))
}

fn columns() -> impl Iterator<Item = Line> {
    (0..SIDE).map(|col| std::array::from_fn(move |row| (row, col)))
}

fn diagonals() -> impl Iterator<Item = Line> {
    let main: Line = std::array::from_fn(|i| (i, i));
    let anti: Line = std::array::from_fn(|i| (i, SIDE - 1 - i));
    [main, anti].into_iter()
}

/// Returns the mark filling every cell of the line, if any.
fn line_mark(board: &Board, line: Line) -> Option<Mark> {
    let mut cells = line.into_iter().filter_map(|(row, col)| board.cell(row, col));
    let mark = cells.next()?.mark()?;
    cells.all(|cell| cell == Cell::Occupied(mark)).then_some(mark)
}

/// True iff some row holds four of the same mark.
#[instrument(skip(board))]
pub fn row_win(board: &Board) -> bool {
    rows().any(|line| line_mark(board, line).is_some())
}

/// True iff some column holds four of the same mark.
#[instrument(skip(board))]
pub fn col_win(board: &Board) -> bool {
    columns().any(|line| line_mark(board, line).is_some())
}

/// True iff either diagonal (1,6,11,16 or 4,7,10,13) holds four of the same mark.
#[instrument(skip(board))]
pub fn diag_win(board: &Board) -> bool {
    diagonals().any(|line| line_mark(board, line).is_some())
}

/// True iff any line is complete.
#[instrument(skip(board))]
pub fn has_winner(board: &Board) -> bool {
    row_win(board) || col_win(board) || diag_win(board)
}

/// Returns the mark of the first complete line.
///
/// Rows are scanned first, then columns, then diagonals.
#[instrument(skip(board))]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    rows()
        .chain(columns())
        .chain(diagonals())
        .find_map(|line| line_mark(board, line))
}

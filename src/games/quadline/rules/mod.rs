//! Game rules for quadline.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here mutates the
//! board or performs I/O; every check rescans the whole grid.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{classify, is_full, is_game_over};
pub use moves::{is_valid_move, validate_move};
pub use win::{col_win, diag_win, has_winner, row_win, winning_mark};

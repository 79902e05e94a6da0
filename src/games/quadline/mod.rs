mod action;
mod phases;
mod position;
mod round;
pub mod rules;
mod score;
mod types;

pub use action::{Move, MoveError};
pub use phases::Outcome;
pub use position::{CELLS, Position, SIDE};
pub use round::{Round, RoundState, play_round};
pub use score::Score;
pub use types::{Board, Cell, Mark, Player};

//! Round state machine.
//!
//! A round borrows the session's board, alternates turns starting with the
//! given player and ends in exactly one [`Outcome`]. `Terminal` is absorbing:
//! once reached, further moves are refused.

use super::action::{Move, MoveError};
use super::phases::Outcome;
use super::{Board, Player, rules};
use crate::console::{Console, ConsoleError};
use tracing::{debug, info, instrument};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for this player to move.
    AwaitingMove(Player),
    /// Round ended.
    Terminal(Outcome),
}

/// One round played on a borrowed board.
#[derive(Debug)]
pub struct Round<'b> {
    board: &'b mut Board,
    state: RoundState,
    history: Vec<Move>,
}

impl<'b> Round<'b> {
    /// Starts a round with `starting` to move.
    ///
    /// The board is used as-is; callers reset it first.
    #[instrument(skip(board))]
    pub fn start(board: &'b mut Board, starting: Player) -> Self {
        Self {
            board,
            state: RoundState::AwaitingMove(starting),
            history: Vec::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Terminal(outcome) => Some(outcome),
            RoundState::AwaitingMove(_) => None,
        }
    }

    /// Applies a raw move for the player whose turn it is.
    ///
    /// A refused move leaves the round untouched, still waiting on the same
    /// player.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `CellOccupied` for a bad cell, `RoundOver` once terminal.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit(&mut self, raw: i64) -> Result<RoundState, MoveError> {
        let player = match self.state {
            RoundState::AwaitingMove(player) => player,
            RoundState::Terminal(_) => return Err(MoveError::RoundOver),
        };

        let position = rules::validate_move(self.board, raw)?;
        self.board.set_mark(position, player.mark())?;
        let action = Move::new(player, position);
        debug!(%action, "Move applied");
        self.history.push(action);

        self.state = match rules::classify(self.board, player) {
            Some(outcome) => {
                info!(%outcome, moves = self.history.len(), "Round finished");
                RoundState::Terminal(outcome)
            }
            None => RoundState::AwaitingMove(player.opponent()),
        };
        Ok(self.state)
    }
}

/// Plays a full round against a console and returns its outcome.
///
/// The board is shown before each turn. Refused moves are reported back to
/// the console and the same player is asked again.
#[instrument(skip(board, console))]
pub fn play_round<C: Console + ?Sized>(
    board: &mut Board,
    starting: Player,
    console: &mut C,
) -> Result<Outcome, ConsoleError> {
    let mut round = Round::start(board, starting);

    loop {
        let player = match round.state() {
            RoundState::Terminal(outcome) => return Ok(outcome),
            RoundState::AwaitingMove(player) => player,
        };

        console.render_board(round.board())?;
        loop {
            let raw = console.prompt_move(player)?;
            match round.submit(raw) {
                Ok(_) => break,
                Err(reason) => {
                    debug!(%player, raw, %reason, "Move refused");
                    console.reject_move(player, raw, &reason)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(round: &mut Round<'_>, moves: &[i64]) -> RoundState {
        let mut state = round.state();
        for &raw in moves {
            state = round.submit(raw).unwrap();
        }
        state
    }

    #[test]
    fn test_turns_alternate() {
        let mut board = Board::new();
        let mut round = Round::start(&mut board, Player::Player2);
        assert_eq!(round.state(), RoundState::AwaitingMove(Player::Player2));
        assert_eq!(round.submit(1), Ok(RoundState::AwaitingMove(Player::Player1)));
        assert_eq!(round.submit(2), Ok(RoundState::AwaitingMove(Player::Player2)));
        assert_eq!(round.history().len(), 2);
        assert_eq!(round.history()[0].player, Player::Player2);
    }

    #[test]
    fn test_refused_move_keeps_turn() {
        let mut board = Board::new();
        let mut round = Round::start(&mut board, Player::Player1);
        round.submit(6).unwrap();
        assert!(matches!(round.submit(6), Err(MoveError::CellOccupied(_))));
        assert_eq!(round.submit(0), Err(MoveError::OutOfRange(0)));
        assert_eq!(round.submit(17), Err(MoveError::OutOfRange(17)));
        assert_eq!(round.state(), RoundState::AwaitingMove(Player::Player2));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_mover_wins() {
        let mut board = Board::new();
        let mut round = Round::start(&mut board, Player::Player1);
        // X: 1 2 3 4, O: 5 6 7
        let state = play(&mut round, &[1, 5, 2, 6, 3, 7, 4]);
        assert_eq!(state, RoundState::Terminal(Outcome::Win(Player::Player1)));
        assert_eq!(round.outcome(), Some(Outcome::Win(Player::Player1)));
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut board = Board::new();
        let mut round = Round::start(&mut board, Player::Player2);
        // O: 4 7 10 13 (anti-diagonal), X: 1 2 3
        play(&mut round, &[4, 1, 7, 2, 10, 3, 13]);
        assert_eq!(round.outcome(), Some(Outcome::Win(Player::Player2)));
        assert_eq!(round.submit(16), Err(MoveError::RoundOver));
        assert_eq!(round.history().len(), 7);
    }
}

//! Running totals for a session.

use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per player and ties, counted over one process run.
///
/// Counters wrap at `u32::MAX` rather than saturate or fail.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize,
)]
pub struct Score {
    /// Rounds won by player 1.
    player1_wins: u32,
    /// Rounds won by player 2.
    player2_wins: u32,
    /// Rounds that ended tied.
    ties: u32,
}

impl Score {
    /// Creates an all-zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win(Player::Player1) => &mut self.player1_wins,
            Outcome::Win(Player::Player2) => &mut self.player2_wins,
            Outcome::Tie => &mut self.ties,
        };
        *counter = counter.wrapping_add(1);
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.player1_wins,
            Player::Player2 => self.player2_wins,
        }
    }

    /// Total rounds counted.
    pub fn rounds(&self) -> u64 {
        u64::from(self.player1_wins) + u64::from(self.player2_wins) + u64::from(self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut score = Score::new();
        score.record(Outcome::Win(Player::Player1));
        score.record(Outcome::Win(Player::Player1));
        score.record(Outcome::Win(Player::Player2));
        score.record(Outcome::Tie);
        assert_eq!(*score.player1_wins(), 2);
        assert_eq!(*score.player2_wins(), 1);
        assert_eq!(*score.ties(), 1);
        assert_eq!(score.wins(Player::Player2), 1);
        assert_eq!(score.rounds(), 4);
    }

    #[test]
    fn test_counter_wraps() {
        let mut score = Score {
            ties: u32::MAX,
            ..Score::default()
        };
        score.record(Outcome::Tie);
        assert_eq!(*score.ties(), 0);
    }
}

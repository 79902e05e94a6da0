//! Session controller: repeated rounds, running score, alternating opener.

use crate::console::{Console, ConsoleError};
use crate::games::quadline::{Board, Outcome, Player, Score, play_round};
use tracing::{info, instrument};

/// A run of rounds sharing one board and one score.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    score: Score,
    first_player: Player,
    last_starter: Option<Player>,
}

impl Session {
    /// Creates a session whose first round is opened by `first_player`.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            score: Score::new(),
            first_player,
            last_starter: None,
        }
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the board as the last round left it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player who will open the next round.
    pub fn next_starter(&self) -> Player {
        self.last_starter
            .map_or(self.first_player, Player::opponent)
    }

    /// Flips the opener and clears the board.
    fn begin_round(&mut self) -> Player {
        let starter = self.next_starter();
        self.last_starter = Some(starter);
        self.board.reset();
        starter
    }

    /// Plays one round, records it and shows the result.
    #[instrument(skip(self, console))]
    pub fn play_one<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Outcome, ConsoleError> {
        let starter = self.begin_round();
        info!(%starter, round = self.score.rounds() + 1, "Round starting");

        let outcome = play_round(&mut self.board, starter, console)?;
        self.score.record(outcome);

        console.render_board(&self.board)?;
        console.report_outcome(outcome)?;
        console.report_scores(&self.score)?;
        Ok(outcome)
    }

    /// Plays rounds until the console declines another.
    #[instrument(skip(self, console))]
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Score, ConsoleError> {
        loop {
            self.play_one(console)?;
            if !console.prompt_continue()? {
                break;
            }
        }
        info!(
            player1 = self.score.player1_wins(),
            player2 = self.score.player2_wins(),
            ties = self.score.ties(),
            "Session finished"
        );
        Ok(self.score)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Player::Player1)
    }
}

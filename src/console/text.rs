//! Line-oriented console over any reader and writer.

use super::{Console, ConsoleError};
use crate::config::GameConfig;
use crate::games::quadline::{Board, CELLS, MoveError, Outcome, Player, Score};
use std::io::{BufRead, StdinLock, StdoutLock, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Plain-text console reading one answer per line.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl TextConsole<StdinLock<'static>, StdoutLock<'static>> {
    /// Binds to the process's stdin and stdout.
    pub fn stdio(config: GameConfig) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout().lock(), config)
    }
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced, so they fail parsing like any
    /// other junk instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn ask(&mut self, prompt: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    #[instrument(skip(self))]
    fn prompt_move(&mut self, player: Player) -> Result<i64, ConsoleError> {
        let prompt = format!(
            "Enter the position to place your move ({}): ",
            self.config.label(player)
        );
        self.ask(&prompt)?;

        loop {
            let Some(line) = self.read_line()? else {
                return Err(ConsoleError::InputClosed);
            };
            match line.trim().parse::<i64>() {
                Ok(raw) => return Ok(raw),
                Err(_) => {
                    debug!(input = %line.trim(), "Not a number");
                    self.ask(&format!("Please enter a number from 1 to {CELLS}: "))?;
                }
            }
        }
    }

    fn reject_move(
        &mut self,
        _player: Player,
        _raw: i64,
        reason: &MoveError,
    ) -> Result<(), ConsoleError> {
        writeln!(self.output, "Invalid move: {reason}. Please try again.")?;
        Ok(())
    }

    fn render_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        write!(self.output, "{board}")?;
        Ok(())
    }

    fn report_outcome(&mut self, outcome: Outcome) -> Result<(), ConsoleError> {
        match outcome.winner() {
            Some(player) => writeln!(
                self.output,
                "Game Over. {} has won.",
                self.config.label(player)
            )?,
            None => writeln!(self.output, "The game is tied.")?,
        }
        Ok(())
    }

    fn report_scores(&mut self, score: &Score) -> Result<(), ConsoleError> {
        for player in Player::iter() {
            writeln!(
                self.output,
                "{} score: {}",
                self.config.label(player),
                score.wins(player)
            )?;
        }
        writeln!(self.output, "Number of ties: {}", score.ties())?;
        writeln!(self.output)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn prompt_continue(&mut self) -> Result<bool, ConsoleError> {
        let quit_key = *self.config.quit_key();
        loop {
            self.ask(&format!("Press {quit_key} to quit, or p to play again: "))?;
            let Some(line) = self.read_line()? else {
                debug!("Input closed at play-again prompt");
                return Ok(false);
            };
            if let Some(answer) = line.trim().chars().next() {
                return Ok(answer != quit_key);
            }
        }
    }

    fn report_farewell(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Thanks for playing :)")?;
        self.output.flush()?;
        Ok(())
    }
}

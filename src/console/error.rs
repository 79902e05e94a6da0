//! Console error types.

use derive_more::Display;

/// Failure talking to the terminal.
#[derive(Debug, Display)]
pub enum ConsoleError {
    /// Reading or writing failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended while a move was still expected.
    #[display("Input closed before a move was entered")]
    InputClosed,
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(err) => Some(err),
            ConsoleError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

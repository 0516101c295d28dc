use std::io;

use thiserror::Error;

/// Everything that makes the binary exit unsuccessfully.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The input is not valid UTF-8.
    #[error("invalid UTF-8 at byte {offset}: {source}")]
    Invalid {
        /// Start of the first invalid character.
        offset: usize,
        /// Why it is invalid.
        source: utf8dfa::Error,
    },
}

impl CliError {
    /// Process exit code: `1` for invalid input, `2` for I/O failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Invalid { .. } => 1,
            CliError::Io(_) => 2,
        }
    }
}

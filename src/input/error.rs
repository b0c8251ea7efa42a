//! Event parsing errors.

use thiserror::Error;

/// A script token that does not name an event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Unknown event {0:?}")]
    UnknownToken(String),

    #[error("Coins of {0} are not accepted, expected 1, 2, 5 or 10")]
    InvalidDenomination(u32),

    #[error("Missing coin value after {0:?}")]
    MissingDenomination(String),
}

/// A script line that failed to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: ParseEventError,
}

//! Error types for fate deck sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Command word not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// CHAOS draws require a passed age gate.
    #[error("CHAOS is locked until the age gate is passed")]
    AgeRestricted,

    /// Malformed command arguments.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Deck engine error.
    #[error("{0}")]
    Deck(#[from] oracle_deck::DeckError),
}

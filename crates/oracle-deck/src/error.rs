//! Error types for the fate deck.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that indicate caller defects.
///
/// Runtime conditions never error: exhausted pools reshuffle themselves and
/// persistence failures are swallowed.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A category token outside the closed enumeration.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A kind token outside the closed enumeration.
    #[error("unknown kind: {0}")]
    UnknownKind(String),
}

//! Errors reported by the game engine

use thiserror::Error;

/// Failure of a single engine call
///
/// Every variant leaves the engine state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid game configuration: length {length} must be at least 1 and max wrong guesses {max_wrong} must not be negative")]
    InvalidConfig { length: usize, max_wrong: i32 },

    #[error("no dictionary words remain for this game")]
    NoCandidates,

    #[error("no wrong guesses remaining")]
    GuessesExhausted,

    #[error("'{0}' has already been guessed")]
    DuplicateGuess(char),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

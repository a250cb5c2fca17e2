//! Error types.
//!
//! Nothing here is fatal: a rejected move leaves the session untouched and
//! the caller decides whether to surface it.

use derive_more::{Display, Error, From};

use crate::board::Position;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The session has already reached its terminal state.
    #[display("Game is already over")]
    GameOver,

    /// The target lies outside the board.
    #[display("Position {_0} is off the board")]
    OutOfBounds(#[error(not(source))] Position),

    /// The target holds no toothpick to toggle.
    #[display("Position {_0} is empty")]
    EmptyCell(#[error(not(source))] Position),
}

/// Top-level error for fallible engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Requested board size outside `3..=9`.
    #[display("Board size {_0} is outside 3..=9")]
    #[from(ignore)]
    InvalidSize(#[error(not(source))] usize),

    /// Move rejected; the session was not mutated.
    #[display("Invalid move: {_0}")]
    InvalidMove(MoveError),

    /// Board text could not be parsed.
    #[display("Malformed board: {_0}")]
    #[from(ignore)]
    MalformedBoard(#[error(not(source))] String),

    /// Internal consistency check failed. Indicates a programming defect.
    #[display("Invariant violation: {_0}")]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

impl GameError {
    /// The move rejection reason, if this is a rejected move.
    #[must_use]
    pub fn move_error(&self) -> Option<MoveError> {
        match self {
            GameError::InvalidMove(e) => Some(*e),
            _ => None,
        }
    }
}

//! Errors for rejected transitions.
//!
//! The `try_*` transitions on [`GameState`](super::GameState) return these;
//! the plain transitions treat them as no-ops.

use super::Position;

/// Why a requested move was not played.
///
/// [`GameState::play_move`](super::GameState::play_move) treats every
/// variant as a no-op; [`GameState::try_play_move`](super::GameState::try_play_move)
/// reports it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Why a requested jump was not performed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The step does not exist in the history.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

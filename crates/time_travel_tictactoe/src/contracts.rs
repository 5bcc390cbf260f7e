//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The viewed board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if rules::check_winner(state.current_board()).is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(state))]
    pub fn check(pos: &Position, state: &GameState) -> Result<(), MoveError> {
        if !state.current_board().is_empty(*pos) {
            Err(MoveError::SquareOccupied(*pos))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is not over and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(pos: &Position, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one snapshot follows the previously viewed step
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let expected_step = before.current_step() + 1;
        if after.current_step() != expected_step || after.history().len() != expected_step + 1 {
            warn!(
                before = before.current_step(),
                after = after.current_step(),
                len = after.history().len(),
                "Move did not append exactly one snapshot"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must append one snapshot after the viewed step"
                    .to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

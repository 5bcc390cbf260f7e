//! History controller: the game state and its transitions.
//!
//! Every transition borrows the current state and returns a new value,
//! so earlier states stay valid for comparison and time travel. Requests
//! that cannot be honoured (occupied square, finished game, unknown step)
//! return the state unchanged.

use super::action::{JumpError, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::{History, Snapshot};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{self, Evaluation};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Derived phase of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can still be played.
    InProgress,
    /// A player holds a complete line.
    Won,
    /// The board is full without a line.
    Draw,
}

/// Complete game session state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(super) history: History,
    pub(super) current_step: usize,
    pub(super) sort_descending: bool,
}

impl GameState {
    /// Creates a new game: one empty snapshot, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            sort_descending: false,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns whether the move list is shown newest first.
    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// Returns the snapshot being viewed.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history.snapshots[self.current_step]
    }

    /// Returns the board being viewed.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Returns the player who moves next from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.current_step)
    }

    /// Evaluates the viewed board.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(self.current_board())
    }

    /// Returns the derived phase of the viewed board.
    pub fn phase(&self) -> Phase {
        let board = self.current_board();
        match rules::evaluate(board) {
            Evaluation::Win { .. } => Phase::Won,
            Evaluation::NoResult if rules::is_full(board) => Phase::Draw,
            Evaluation::NoResult => Phase::InProgress,
        }
    }

    /// Plays the next player's mark at `cell` (0-8).
    ///
    /// Discards any snapshots after the viewed step before appending.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell` is not 0-8.
    /// - [`MoveError::GameOver`] if the viewed board has a winner.
    /// - [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_play_move(&self, cell: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;

        MoveContract::pre(self, &pos)?;

        let next_snapshot = self.current_snapshot().advance(pos, self.next_player());
        let next = Self {
            history: self.history.branch(self.current_step, next_snapshot),
            current_step: self.current_step + 1,
            sort_descending: self.sort_descending,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(position = %pos, len = next.history.len(), "Move played");
        Ok(next)
    }

    /// Plays the next player's mark at `cell`, or returns the state
    /// unchanged if the move is not allowed.
    #[instrument(skip(self))]
    pub fn play_move(&self, cell: usize) -> Self {
        self.try_play_move(cell).unwrap_or_else(|e| {
            debug!(error = %e, cell, "Move ignored");
            self.clone()
        })
    }

    /// Views `step` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if the step does not exist.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            current_step: step,
            ..self.clone()
        })
    }

    /// Views `step`, or returns the state unchanged if it does not exist.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Self {
        self.try_jump_to(step).unwrap_or_else(|e| {
            debug!(error = %e, "Jump ignored");
            self.clone()
        })
    }

    /// Flips the move list order. History and viewed step are untouched.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sort_descending: !self.sort_descending,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    current_step: usize,
    sort_descending: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            current_step: raw.current_step,
            sort_descending: raw.sort_descending,
        };
        TicTacToeInvariants::check_all(&state).map_err(|violations| {
            violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play_all(cells: &[usize]) -> GameState {
        cells
            .iter()
            .fold(GameState::new(), |state, &cell| state.play_move(cell))
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert!(!state.sort_descending());
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn test_play_move_places_next_player_mark() {
        let state = play_all(&[4, 0]);
        assert_eq!(state.current_step(), 2);
        assert_eq!(state.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(state.current_snapshot().played(), &Some(Position::TopLeft));
        assert_eq!(state.next_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_reports_error() {
        let state = play_all(&[4]);
        assert_eq!(
            state.try_play_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(state.play_move(4), state);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let state = play_all(&[4]);
        assert_eq!(state.try_play_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(state.play_move(42), state);
    }

    #[test]
    fn test_move_after_win_reports_game_over() {
        let state = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(state.phase(), Phase::Won);
        assert_eq!(state.try_play_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_keeps_history() {
        let state = play_all(&[0, 1, 2]);
        let viewed = state.jump_to(1);
        assert_eq!(viewed.current_step(), 1);
        assert_eq!(viewed.history(), state.history());
        assert_eq!(viewed.next_player(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let state = play_all(&[0, 1]);
        assert_eq!(
            state.try_jump_to(3),
            Err(JumpError::OutOfRange { step: 3, len: 3 })
        );
        assert_eq!(state.jump_to(3), state);
    }

    #[test]
    fn test_toggle_sort_order_only_flips_flag() {
        let state = play_all(&[0, 1]).jump_to(1);
        let toggled = state.toggle_sort_order();
        assert!(toggled.sort_descending());
        assert_eq!(toggled.current_step(), 1);
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.toggle_sort_order(), state);
    }

    #[test]
    fn test_play_from_earlier_step_truncates() {
        let state = play_all(&[0, 1, 2]).jump_to(1).play_move(8);
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.current_step(), 2);
        assert_eq!(
            state.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        assert!(state.current_board().is_empty(Position::TopRight));
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["current_step"] = serde_json::json!(1);
        let result: Result<GameState, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_preserves_state() {
        let state = play_all(&[4, 0, 8]).jump_to(1).toggle_sort_order();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

//! History consistency invariant: the history is a single legal game line.

use super::super::history::Snapshot;
use super::super::rules;
use super::super::GameState;
use super::Invariant;

/// Invariant: The history starts from the empty board, the viewed step
/// exists, and no snapshot follows a won board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let snapshots = state.history().snapshots();

        let starts_empty = snapshots.first() == Some(&Snapshot::initial());
        let step_in_range = state.current_step() < snapshots.len();
        let nothing_after_win = snapshots
            .iter()
            .rev()
            .skip(1)
            .all(|snap| rules::check_winner(snap.board()).is_none());

        starts_empty && step_in_range && nothing_after_win
    }

    fn description() -> &'static str {
        "History starts empty, contains the viewed step, and ends at the first win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), |s, cell| s.play_move(cell));
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut state = GameState::new().play_move(4);
        state.current_step = 2;
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_snapshot_after_win_violates() {
        let mut state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), |s, cell| s.play_move(cell));
        let extra = state
            .current_snapshot()
            .advance(Position::BottomRight, Player::O);
        state.history.snapshots.push(extra);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}

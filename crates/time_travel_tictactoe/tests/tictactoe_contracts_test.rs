//! Tests for move contracts and invariants through the public API.

use time_travel_tictactoe::{
    AlternatingTurnInvariant, Contract, GameState, HistoryConsistentInvariant, Invariant,
    InvariantSet, MoveContract, MoveError, Position, TicTacToeInvariants,
};

#[test]
fn test_precondition_allows_empty_square() {
    let state = GameState::new();
    assert!(MoveContract::pre(&state, &Position::Center).is_ok());
}

#[test]
fn test_precondition_rejects_occupied_square() {
    let state = GameState::new().play_move(4);
    assert_eq!(
        MoveContract::pre(&state, &Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_try_play_move_reports_reason() {
    let state = GameState::new()
        .play_move(0)
        .play_move(3)
        .play_move(1)
        .play_move(4)
        .play_move(2);
    let err = state.try_play_move(8).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(err.to_string(), "Game is already over");

    let err = GameState::new().try_play_move(12).unwrap_err();
    assert_eq!(err.to_string(), "Cell 12 is out of bounds (must be 0-8)");
}

#[test]
fn test_invariants_hold_through_time_travel() {
    let mut state = GameState::new();
    let script = [
        (4, None),
        (0, None),
        (8, Some(1)),
        (2, None),
        (6, Some(0)),
        (5, None),
    ];
    for (cell, jump) in script {
        state = state.play_move(cell);
        if let Some(step) = jump {
            state = state.jump_to(step);
        }
        assert!(TicTacToeInvariants::check_all(&state).is_ok());
        assert!(AlternatingTurnInvariant::holds(&state));
        assert!(HistoryConsistentInvariant::holds(&state));
    }
}

//! Time-travel tic-tac-toe.
//!
//! A tic-tac-toe game whose state keeps one board snapshot per ply, so
//! any earlier position can be viewed and played from again.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of a board
//! - **Game state**: snapshot history, viewed step and list order, with
//!   value-returning transitions (`play_move`, `jump_to`, `toggle_sort_order`)
//! - **View**: status, move labels and highlights derived on every read
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{GameState, GameStatus, Player};
//!
//! let state = GameState::new()
//!     .play_move(0)
//!     .play_move(1)
//!     .play_move(4)
//!     .play_move(3)
//!     .play_move(8);
//! assert!(matches!(state.derive_status(), GameStatus::Win { player: Player::X, .. }));
//!
//! // View the start again; the history is kept.
//! let start = state.jump_to(0);
//! assert_eq!(start.derive_status(), GameStatus::NextTurn(Player::X));
//! assert_eq!(start.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{JumpError, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use history::{History, Snapshot};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{Evaluation, WinningLine, evaluate};
pub use state::{GameState, Phase};
pub use types::{Board, Player, Square};
pub use view::{GameStatus, GameView, MoveEntry, derive_move_label};

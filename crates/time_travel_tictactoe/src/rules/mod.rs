//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated
//! from history bookkeeping so both the controller and the invariant
//! checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Evaluation, LINES, WinningLine, check_winner, evaluate};

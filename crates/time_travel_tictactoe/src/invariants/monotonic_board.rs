//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Snapshot `n` equals snapshot `n - 1` with one additional mark at the
/// recorded cell, placed by the player whose turn ply `n - 1` was.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                match *next.played() {
                    Some(pos) => {
                        prev.board().get(pos) == Square::Empty
                            && *next.board() == prev.board().with_mark(pos, Player::for_ply(ply))
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

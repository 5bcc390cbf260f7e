//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// Snapshot `n` holds exactly `n` marks: `ceil(n / 2)` X's and
/// `floor(n / 2)` O's.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .all(|(n, snap)| {
                let count = |player| {
                    snap.board()
                        .squares()
                        .iter()
                        .filter(|s| **s == Square::Occupied(player))
                        .count()
                };
                count(Player::X) == n.div_ceil(2) && count(Player::O) == n / 2
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

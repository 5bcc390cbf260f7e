//! Board snapshots, one per ply.

use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An immutable board together with the cell played to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the ply.
    pub(super) board: Board,
    /// Cell played to reach this board; `None` for the initial snapshot.
    pub(super) played: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// Snapshot reached from `self` by `player` marking `pos`.
    pub fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            played: Some(pos),
        }
    }
}

/// Ordered snapshots; `history[0]` is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct History {
    pub(super) snapshots: Vec<Snapshot>,
}

impl History {
    /// History holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots (plies + 1). Never zero.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots in ply order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `step` and appends `next`.
    ///
    /// `step` must be a valid index.
    #[instrument(skip(self, next), fields(len = self.snapshots.len()))]
    pub(super) fn branch(&self, step: usize, next: Snapshot) -> Self {
        let mut snapshots = self.snapshots[..=step].to_vec();
        snapshots.push(next);
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = String;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        match snapshots.first() {
            Some(first) if *first == Snapshot::initial() => Ok(Self { snapshots }),
            Some(_) => Err("history must start with the empty board".to_string()),
            None => Err("history must not be empty".to_string()),
        }
    }
}

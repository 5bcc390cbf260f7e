//! Display projections of a [`GameState`].
//!
//! Nothing here is stored: status, labels and highlights are recomputed
//! from the state on every read.

use super::history::Snapshot;
use super::rules::{Evaluation, WinningLine};
use super::state::GameState;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player completed a line.
    Win {
        /// The winner.
        player: Player,
        /// The line to highlight.
        line: WinningLine,
    },
    /// Nine marks and no line.
    Draw,
    /// The game continues with this player.
    NextTurn(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Win { player, .. } => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "It's a draw!"),
            GameStatus::NextTurn(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    move_number: usize,
    /// Button text.
    label: String,
    /// Whether this is the step being viewed.
    is_current: bool,
}

/// Label for the history entry of `snapshot` at `move_number`.
///
/// Coordinates are `(column, row)`, both 1-based.
pub fn derive_move_label(snapshot: &Snapshot, move_number: usize) -> String {
    match snapshot.played() {
        Some(pos) if move_number > 0 => {
            format!("Go to move #{} ({},{})", move_number, pos.column(), pos.row())
        }
        _ => "Go to game start".to_string(),
    }
}

impl GameState {
    /// Status of the viewed board.
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn derive_status(&self) -> GameStatus {
        match self.evaluation() {
            Evaluation::Win { player, line } => GameStatus::Win { player, line },
            Evaluation::NoResult if self.current_step() == 9 => GameStatus::Draw,
            Evaluation::NoResult => GameStatus::NextTurn(self.next_player()),
        }
    }

    /// Move list in display order.
    ///
    /// The entry for the viewed step is flagged regardless of order.
    #[instrument(skip(self), fields(descending = self.sort_descending()))]
    pub fn ordered_move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .map(|(move_number, snapshot)| MoveEntry {
                move_number,
                label: derive_move_label(snapshot, move_number),
                is_current: move_number == self.current_step(),
            })
            .collect();
        if self.sort_descending() {
            entries.reverse();
        }
        entries
    }

    /// Cells of the winning line, or nothing if there is no winner.
    pub fn highlighted_cells(&self) -> Vec<Position> {
        match self.derive_status() {
            GameStatus::Win { line, .. } => line.to_vec(),
            GameStatus::Draw | GameStatus::NextTurn(_) => Vec::new(),
        }
    }

    /// Everything a presentation layer needs to redraw.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let status = self.derive_status();
        GameView {
            board: self.current_board().clone(),
            status,
            status_text: status.to_string(),
            highlighted: self.highlighted_cells(),
            moves: self.ordered_move_list(),
            sort_descending: self.sort_descending(),
        }
    }
}

/// Snapshot of all derived display values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the viewed step.
    board: Board,
    /// Derived status.
    status: GameStatus,
    /// Status rendered for display.
    status_text: String,
    /// Winning cells to emphasize.
    highlighted: Vec<Position>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Whether `moves` is newest first.
    sort_descending: bool,
}

impl GameView {
    /// Renders the view as plain text.
    pub fn render_text(&self) -> String {
        let mut out = self.board.display(&self.highlighted);
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label));
        }
        out
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when held by one player.
pub type WinningLine = [Position; 3];

/// The eight winning lines, in scan order.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board.
///
/// A draw is not represented here: callers combine `NoResult`
/// with [`is_full`](super::is_full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line is complete.
    NoResult,
    /// A player holds a complete line.
    Win {
        /// The winning player.
        player: Player,
        /// The first complete line in scan order.
        line: WinningLine,
    },
}

impl Evaluation {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::NoResult => None,
            Evaluation::Win { player, .. } => Some(*player),
        }
    }
}

/// Evaluates the board.
///
/// Lines are scanned rows top to bottom, columns left to right, then
/// the main and anti diagonals; the first complete line wins.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Evaluation::Win { player, line };
        }
    }

    Evaluation::NoResult
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(idx, player) in marks {
            board.set(Position::ALL[idx], Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Evaluation::NoResult);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|p| (p.to_index(), Player::O)).collect();
            let board = board_with(&marks);
            assert_eq!(
                evaluate(&board),
                Evaluation::Win {
                    player: Player::O,
                    line
                }
            );
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (0, Player::X),
            (4, Player::X),
            (8, Player::X),
            (1, Player::O),
        ]);
        assert_eq!(
            evaluate(&board),
            Evaluation::Win {
                player: Player::X,
                line: [Position::TopLeft, Position::Center, Position::BottomRight],
            }
        );
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Top row and left column both complete; the row is scanned first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(
            evaluate(&board),
            Evaluation::Win {
                player: Player::X,
                line: LINES[0],
            }
        );

        // Middle column and anti-diagonal; columns precede diagonals.
        let board = board_with(&[
            (1, Player::O),
            (4, Player::O),
            (7, Player::O),
            (2, Player::O),
            (6, Player::O),
        ]);
        assert_eq!(
            evaluate(&board),
            Evaluation::Win {
                player: Player::O,
                line: LINES[4],
            }
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }
}

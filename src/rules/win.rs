//! Win detection logic.

use crate::types::{Board, Cell, Side};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Each entry is a triple of board indices whose simultaneous occupation
/// by one side ends the game. This set is fixed for the 3x3 board.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Checks if the given side holds a complete winning line.
///
/// The engine calls this for the side that just played, since only the
/// mover can have completed a line on their own move.
#[instrument(skip(board))]
pub fn is_win_for(board: &Board, side: Side) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(side))))
}

/// Checks for a winner on the board, regardless of who moved last.
///
/// Returns `Some(side)` if either side has three in a row, `None`
/// otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Side> {
    for [a, b, c] in WIN_LINES {
        let cell = board.get(a)?;
        if !cell.is_empty() && board.get(b) == Some(cell) && board.get(c) == Some(cell) {
            return cell.side();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!is_win_for(&board, Side::X));
        assert!(!is_win_for(&board, Side::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Side::X));
        board.set(1, Cell::Occupied(Side::X));
        board.set(2, Cell::Occupied(Side::X));
        assert_eq!(winner(&board), Some(Side::X));
        assert!(is_win_for(&board, Side::X));
        assert!(!is_win_for(&board, Side::O));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(1, Cell::Occupied(Side::O));
        board.set(4, Cell::Occupied(Side::O));
        board.set(7, Cell::Occupied(Side::O));
        assert_eq!(winner(&board), Some(Side::O));
        assert!(is_win_for(&board, Side::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(2, Cell::Occupied(Side::O));
        board.set(4, Cell::Occupied(Side::O));
        board.set(6, Cell::Occupied(Side::O));
        assert_eq!(winner(&board), Some(Side::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Side::X));
        board.set(1, Cell::Occupied(Side::X));
        assert_eq!(winner(&board), None);
        assert!(!is_win_for(&board, Side::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Side::X));
        board.set(1, Cell::Occupied(Side::O));
        board.set(2, Cell::Occupied(Side::X));
        assert_eq!(winner(&board), None);
    }
}

//! Tie detection logic.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all nine cells occupied).
///
/// A full board with no winner is a tie. The engine checks for a win
/// first, so a ninth move that completes a line is a win, never a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

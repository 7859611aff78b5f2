//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Cell};

/// Invariant: board cells are monotonic (never overwritten or cleared).
///
/// Once a cell transitions from empty to marked, only a full restart
/// resets it. Verified by replaying the move history and comparing the
/// reconstruction against the live board.
pub struct MonotonicBoard;

impl Invariant<GameEngine> for MonotonicBoard {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            // A move must have targeted an empty cell
            if !reconstructed.is_empty(mov.index) {
                return false;
            }
            reconstructed.set(mov.index, Cell::Occupied(mov.side));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

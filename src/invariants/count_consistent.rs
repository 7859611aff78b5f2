//! Move count invariant: the counter matches the board and history.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: the move counter equals the number of occupied cells.
///
/// Every successful move marks exactly one cell, pushes exactly one
/// history entry, and bumps the counter once, so all three quantities
/// stay equal until a restart.
pub struct CountConsistent;

impl Invariant<GameEngine> for CountConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let occupied = engine
            .board()
            .cells()
            .iter()
            .filter(|cell| !cell.is_empty())
            .count();

        engine.move_count() as usize == occupied && engine.history().len() == occupied
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}

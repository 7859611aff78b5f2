//! First-class move records.
//!
//! Each successful placement is recorded as a [`Move`] in the engine's
//! history. History entries drive invariant checking and replay; they are
//! serializable so a consumer can log or persist a finished game.

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// A single placement: `side` marked the cell at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that made the move.
    pub side: Side,
    /// Board index of the marked cell (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move record.
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.index)
    }
}

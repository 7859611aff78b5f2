//! Serializable snapshot of the engine for presentation layers.

use crate::engine::GameEngine;
use crate::types::{Cell, GameState, Side};
use serde::{Deserialize, Serialize};

/// Read-only, phase-agnostic view of the engine.
///
/// The presentation layer takes a snapshot after each call into the
/// engine and renders from it: one cell per grid button, a banner from
/// [`status_string`](Self::status_string), and interactivity gated on
/// [`is_over`](Self::is_over). Snapshots are plain serializable data
/// with no tie back to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Cells in row-major order (0-8).
    pub cells: [Cell; 9],
    /// Game state at the time of the snapshot.
    pub state: GameState,
    /// Side to move, if a game is in progress.
    pub active_side: Option<Side>,
    /// Number of cells filled so far.
    pub move_count: u8,
}

impl From<&GameEngine> for EngineSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            cells: *engine.board().cells(),
            state: engine.state(),
            active_side: engine.active_side(),
            move_count: engine.move_count(),
        }
    }
}

impl EngineSnapshot {
    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self.state {
            GameState::NotStarted => "Ready to start".to_string(),
            GameState::InProgress => match self.active_side {
                Some(side) => format!("In progress. {} to move.", side),
                None => "In progress.".to_string(),
            },
            GameState::Won(side) => format!("{} Wins!", side),
            GameState::Tied => "It's a draw!".to_string(),
        }
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_fresh_engine() {
        let engine = GameEngine::new();
        let snapshot = EngineSnapshot::from(&engine);

        assert_eq!(snapshot.state, GameState::NotStarted);
        assert_eq!(snapshot.active_side, None);
        assert_eq!(snapshot.move_count, 0);
        assert!(snapshot.cells.iter().all(|cell| cell.is_empty()));
        assert!(!snapshot.is_over());
        assert_eq!(snapshot.status_string(), "Ready to start");
    }

    #[test]
    fn test_snapshot_in_progress() {
        let engine = GameEngine::replay(Side::X, &[4]).unwrap();
        let snapshot = EngineSnapshot::from(&engine);

        assert_eq!(snapshot.active_side, Some(Side::O));
        assert_eq!(snapshot.cells[4], Cell::Occupied(Side::X));
        assert_eq!(snapshot.status_string(), "In progress. O to move.");
    }

    #[test]
    fn test_snapshot_of_won_game() {
        let engine = GameEngine::replay(Side::X, &[0, 3, 1, 4, 2]).unwrap();
        let snapshot = EngineSnapshot::from(&engine);

        assert!(snapshot.is_over());
        assert_eq!(snapshot.winner(), Some(Side::X));
        assert_eq!(snapshot.status_string(), "X Wins!");
    }

    #[test]
    fn test_snapshot_of_tied_game() {
        let engine = GameEngine::replay(Side::X, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        let snapshot = EngineSnapshot::from(&engine);

        assert_eq!(snapshot.state, GameState::Tied);
        assert_eq!(snapshot.winner(), None);
        assert_eq!(snapshot.status_string(), "It's a draw!");
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let engine = GameEngine::replay(Side::O, &[4, 0, 8]).unwrap();
        let snapshot = EngineSnapshot::from(&engine);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}

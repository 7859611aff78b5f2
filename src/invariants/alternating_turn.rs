//! Alternating turn invariant: sides strictly alternate.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::GameState;

/// Invariant: sides alternate strictly, starting from the starting side.
///
/// The move history must read S, S', S, S', ... where S is the side
/// passed to `start_game`. While the game is in progress, the active
/// side must also agree with the history length.
pub struct AlternatingTurn;

impl Invariant<GameEngine> for AlternatingTurn {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first() {
            if first.side != engine.starting_side() {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].side == window[1].side {
                return false;
            }
        }

        if engine.state() == GameState::InProgress {
            let expected = if history.len() % 2 == 0 {
                engine.starting_side()
            } else {
                engine.starting_side().opponent()
            };
            if engine.active_side() != Some(expected) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Sides alternate strictly after each non-terminal move"
    }
}

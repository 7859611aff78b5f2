//! Pure tic-tac-toe game-state engine.
//!
//! This crate implements the logic core of two-player tic-tac-toe on a
//! fixed 3x3 grid: turn management, move validation, win/tie detection,
//! and the side-switching protocol. It has no rendering, input handling,
//! or networking. A presentation layer owns a [`GameEngine`], submits
//! moves on behalf of the user, and reads back snapshots to render.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveOutcome, Side};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! engine.start_game(Side::X)?;
//!
//! assert_eq!(engine.submit_move(4)?, MoveOutcome::Continue(Side::O));
//! assert_eq!(engine.submit_move(0)?, MoveOutcome::Continue(Side::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod snapshot;
mod types;

// Public rule and invariant layers
pub mod invariants;
pub mod rules;

// Crate-level exports - engine
pub use engine::{EngineError, GameEngine, MoveOutcome};

// Crate-level exports - domain types
pub use action::Move;
pub use types::{Board, Cell, GameState, Side};

// Crate-level exports - presentation-facing snapshot
pub use snapshot::EngineSnapshot;

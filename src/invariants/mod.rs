//! First-class runtime invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every
//! successful move. They are checked in debug builds (the engine's
//! pre-move validation already guarantees them, so release builds skip
//! the re-verification) and are testable independently.

use crate::engine::GameEngine;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so multiple invariants compose into a single
/// verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod count_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurn;
pub use count_consistent::CountConsistent;
pub use monotonic_board::MonotonicBoard;

/// All engine invariants as a composable set.
pub type EngineInvariants = (MonotonicBoard, AlternatingTurn, CountConsistent);

/// Checks all invariants after a move, in debug builds.
pub(crate) fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = EngineInvariants::check_all(engine) {
            for violation in &violations {
                warn!(description = %violation.description, "engine invariant violated");
            }
            panic!("engine invariants violated: {} failure(s)", violations.len());
        }
    }
}

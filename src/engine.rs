//! The game-state engine: turn management, move validation, and
//! end-of-game detection.
//!
//! [`GameEngine`] owns the board, the active side, and the move counter.
//! A presentation layer drives it through
//! [`start_game`](GameEngine::start_game),
//! [`submit_move`](GameEngine::submit_move), and
//! [`restart`](GameEngine::restart), and renders from the read-only
//! accessors. Every operation validates before it mutates, so a failed
//! call leaves the engine exactly as it was.

use crate::action::Move;
use crate::invariants;
use crate::rules;
use crate::types::{Board, Cell, GameState, Side};
use tracing::instrument;

/// Outcome of a successfully submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues; the contained side is now active.
    Continue(Side),
    /// The submitting side completed a line and won.
    Win(Side),
    /// The ninth move filled the board with no line complete.
    Tie,
}

/// Errors returned by engine operations.
///
/// All errors are recoverable: the engine stays in its prior state and
/// the caller may retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Operation invoked in a state that forbids it.
    #[display("Operation is not valid in state {:?}", _0)]
    InvalidState(GameState),
    /// Move index outside the 0-8 range.
    #[display("Cell index {} is out of range (0-8)", _0)]
    OutOfRange(usize),
    /// Move targets a cell that already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for EngineError {}

/// Tic-tac-toe game-state engine.
///
/// Holds the board, the active side, the move counter, and the game
/// state. The presentation layer is expected to serialize calls (all
/// operations are synchronous in-memory computations) and to stop
/// submitting moves once a terminal outcome is returned, until
/// [`restart`](GameEngine::restart).
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) active: Side,
    pub(crate) starting: Side,
    pub(crate) move_count: u8,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new engine with no game running.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Side::X,
            starting: Side::X,
            move_count: 0,
            state: GameState::NotStarted,
            history: Vec::new(),
        }
    }

    /// Starts a game with the given side moving first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] unless the engine is in
    /// [`GameState::NotStarted`]: a finished game must be
    /// [`restart`](Self::restart)ed before a new one can begin.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, starting_side: Side) -> Result<(), EngineError> {
        if self.state != GameState::NotStarted {
            return Err(EngineError::InvalidState(self.state));
        }

        self.board = Board::new();
        self.history.clear();
        self.move_count = 0;
        self.starting = starting_side;
        self.active = starting_side;
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Submits a move for the active side at the given cell index.
    ///
    /// On success the cell is marked and the end-of-game checks run in
    /// order: win first (all eight lines, for the side that just
    /// played), then tie (move count reached 9), otherwise the active
    /// side flips. A ninth move that completes a line is therefore a
    /// [`MoveOutcome::Win`], never a [`MoveOutcome::Tie`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidState`] if no game is in progress.
    /// - [`EngineError::OutOfRange`] if `index` is not in 0-8.
    /// - [`EngineError::CellOccupied`] if the cell already holds a mark.
    ///   The presentation layer normally prevents this by disabling
    ///   occupied cells; the engine re-validates regardless.
    ///
    /// All checks run before any mutation; a failed call changes
    /// nothing.
    #[instrument(skip(self), fields(side = %self.active))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        if self.state != GameState::InProgress {
            return Err(EngineError::InvalidState(self.state));
        }
        if index >= 9 {
            return Err(EngineError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(EngineError::CellOccupied(index));
        }

        let side = self.active;
        self.board.set(index, Cell::Occupied(side));
        self.history.push(Move::new(side, index));
        self.move_count += 1;

        let outcome = if rules::is_win_for(&self.board, side) {
            self.state = GameState::Won(side);
            MoveOutcome::Win(side)
        } else if rules::is_full(&self.board) {
            self.state = GameState::Tied;
            MoveOutcome::Tie
        } else {
            self.active = side.opponent();
            MoveOutcome::Continue(self.active)
        };

        invariants::assert_invariants(self);
        Ok(outcome)
    }

    /// Resets to a fresh [`GameState::NotStarted`] engine.
    ///
    /// Clears the board, the move counter, and the history. Valid from
    /// any state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.move_count = 0;
        self.state = GameState::NotStarted;
    }

    /// Returns the side whose turn it is, while a game is in progress.
    pub fn active_side(&self) -> Option<Side> {
        match self.state {
            GameState::InProgress => Some(self.active),
            _ => None,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of cells filled so far (0-9).
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the moves made since the game started.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the side that moved first in the current game.
    pub fn starting_side(&self) -> Side {
        self.starting
    }

    /// Builds an engine by starting a game and submitting each index in
    /// order.
    ///
    /// Stops after the first terminal outcome; trailing indices are not
    /// submitted. Useful for reconstructing a position from a recorded
    /// game.
    ///
    /// # Errors
    ///
    /// Propagates the first [`EngineError`] from an invalid index.
    #[instrument]
    pub fn replay(starting_side: Side, indices: &[usize]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.start_game(starting_side)?;

        for &index in indices {
            match engine.submit_move(index)? {
                MoveOutcome::Continue(_) => {}
                MoveOutcome::Win(_) | MoveOutcome::Tie => break,
            }
        }

        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

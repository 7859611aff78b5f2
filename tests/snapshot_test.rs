//! Tests for the presentation-facing snapshot contract.

use tictactoe_engine::{Cell, EngineSnapshot, GameEngine, GameState, MoveOutcome, Side};

/// A minimal stand-in for a presentation layer: renders from snapshots
/// and never reaches into the engine's internals.
fn render(snapshot: &EngineSnapshot) -> String {
    let cells: String = snapshot
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Empty => '.',
            Cell::Occupied(Side::X) => 'X',
            Cell::Occupied(Side::O) => 'O',
        })
        .collect();
    format!("{} [{}]", cells, snapshot.status_string())
}

#[test]
fn test_snapshot_drives_rendering_through_a_game() {
    let mut engine = GameEngine::new();
    assert_eq!(
        render(&EngineSnapshot::from(&engine)),
        "......... [Ready to start]"
    );

    engine.start_game(Side::X).unwrap();
    engine.submit_move(4).unwrap();
    assert_eq!(
        render(&EngineSnapshot::from(&engine)),
        "....X.... [In progress. O to move.]"
    );

    engine.submit_move(0).unwrap();
    engine.submit_move(8).unwrap();
    engine.submit_move(1).unwrap();
    let outcome = engine.submit_move(6).unwrap();
    assert_eq!(outcome, MoveOutcome::Continue(Side::O));
    assert_eq!(
        render(&EngineSnapshot::from(&engine)),
        "OO..X.X.X [In progress. O to move.]"
    );
}

#[test]
fn test_snapshot_reports_game_over() {
    let engine = GameEngine::replay(Side::X, &[0, 3, 1, 4, 2]).unwrap();
    let snapshot = EngineSnapshot::from(&engine);

    assert!(snapshot.is_over());
    assert_eq!(snapshot.state, GameState::Won(Side::X));
    assert_eq!(render(&snapshot), "XXXOO.... [X Wins!]");
}

#[test]
fn test_snapshot_is_detached_from_the_engine() {
    let mut engine = GameEngine::new();
    engine.start_game(Side::X).unwrap();
    let snapshot = EngineSnapshot::from(&engine);

    engine.submit_move(4).unwrap();

    // The earlier snapshot still shows the empty board
    assert!(snapshot.cells.iter().all(|cell| cell.is_empty()));
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_snapshot_serializes_for_logging() {
    let engine = GameEngine::replay(Side::X, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    let snapshot = EngineSnapshot::from(&engine);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["state"], serde_json::json!("Tied"));
    assert_eq!(json["move_count"], serde_json::json!(9));
}

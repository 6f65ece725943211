use leptos::prelude::*;

use canvas::board::Board;
use canvas::camera::Point;
use canvas::polygon::Polygon;

use super::*;

fn engine_with_key(key: &str) -> RwSignal<Engine> {
    let mut engine = Engine::default();
    engine.config.storage_key = key.to_owned();
    let square = |id: &str| Polygon {
        id: id.into(),
        w: 100.0,
        h: 100.0,
        points: vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]],
        fill: "#900025".into(),
    };
    engine.board = Board::from_parts(vec![square("b")], vec![square("w").place_at(Point::new(30.0, 40.0))]);
    RwSignal::new(engine)
}

#[cfg(not(feature = "csr"))]
#[test]
fn save_writes_snapshot_under_configured_key() {
    let engine = engine_with_key("controls-test-save");
    save_board(engine);

    let raw = storage::load_raw("controls-test-save").unwrap();
    let mut restored = Engine::default();
    restored.load(&raw);
    assert!(restored.board.buffer_polygon("b").is_some());
    assert_eq!(restored.board.workspace_polygon("w").map(|p| p.position()), Some(Point::new(30.0, 40.0)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn reset_clears_trays_and_stored_snapshot() {
    let engine = engine_with_key("controls-test-reset");
    let ui = RwSignal::new(UiState::default());
    save_board(engine);
    assert!(storage::load_raw("controls-test-reset").is_some());

    reset_board(engine, ui);
    assert!(engine.with_untracked(|e| e.board.is_empty()));
    assert_eq!(storage::load_raw("controls-test-reset"), None);
}

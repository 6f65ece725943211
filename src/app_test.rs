use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn initial_engine_without_storage_starts_empty() {
    let engine = initial_engine();
    assert!(engine.board.is_empty());
    assert_eq!(engine.config.storage_key, canvas::consts::STORAGE_KEY);
    assert!((engine.camera.scale - 1.0).abs() < f64::EPSILON);
}

//! Integration tests for TestHarness.
//!
//! Tests the headless harness API for programmatic document editing.

use paint_editor_lib::fixtures::{settings_with_limits, GREEN, RED};
use paint_editor_lib::harness::TestHarness;
use shared::{Rect, Rgba};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("paint-editor-it-{}", std::process::id()))
        .join(name)
}

#[test]
fn test_harness_undo_redo_cycle() {
    let mut h = TestHarness::new();
    h.fill_rect(Rect::new(0, 0, 2, 2), RED);
    h.fill_rect(Rect::new(1, 1, 2, 2), GREEN);
    assert_eq!(h.pixel(1, 1), Some(GREEN));

    assert!(h.undo());
    assert_eq!(h.pixel(1, 1), Some(RED));

    assert!(h.undo());
    assert_eq!(h.pixel(1, 1), Some(Rgba::WHITE));

    assert!(!h.undo()); // nothing to undo

    assert!(h.redo());
    assert!(h.redo());
    assert_eq!(h.pixel(1, 1), Some(GREEN));

    assert!(!h.redo()); // nothing to redo
}

#[test]
fn test_harness_labels() {
    let mut h = TestHarness::new();
    h.fill_selection(Rect::new(0, 0, 3, 3), RED);
    h.resize(4, 4, Rgba::WHITE).unwrap();
    let history = h.app.document.history();
    assert_eq!(history.undo_label().as_deref(), Some("Undo: Resize Canvas"));
    assert_eq!(h.undo_names(), vec!["Resize Canvas", "Fill Selection"]);

    h.undo();
    let history = h.app.document.history();
    assert_eq!(history.redo_label().as_deref(), Some("Redo: Resize Canvas"));
}

#[test]
fn test_harness_save_and_reopen() {
    let path = temp_path("doc.json");
    let mut h = TestHarness::new();
    h.fill_rect(Rect::new(0, 0, 4, 4), RED);
    assert!(h.modified());
    h.save(Some(path.as_path())).unwrap();
    assert!(!h.modified());

    // Undo back to the blank canvas, then redo to the saved state.
    h.undo();
    assert!(h.modified());
    h.redo();
    assert!(!h.modified());
    assert_eq!(h.save_point_notifications(), 1);

    let reopened = TestHarness::open(settings_with_limits(1, 10, 1000), &path).unwrap();
    assert_eq!(reopened.pixel(3, 3), Some(RED));
    assert_eq!(reopened.undo_len(), 0);
    assert!(!reopened.modified());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_harness_save_to_last_path() {
    let path = temp_path("resave.json");
    let mut h = TestHarness::new();
    h.save(Some(path.as_path())).unwrap();
    h.set_pixel(0, 0, RED);
    let saved = h.save(None).unwrap();
    assert_eq!(saved, path);
    assert!(!h.modified());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_harness_clear_history() {
    let mut h = TestHarness::new();
    h.set_pixel(0, 0, RED);
    h.undo();
    h.set_pixel(1, 0, RED);
    h.clear_history();
    assert_eq!(h.undo_len(), 0);
    assert_eq!(h.redo_len(), 0);
    assert!(!h.modified());
    assert_eq!(h.pixel(1, 0), Some(RED));
}

#[test]
fn test_harness_from_settings() {
    let h = TestHarness::from_settings(settings_with_limits(2, 4, 100)).unwrap();
    assert_eq!(h.app.document.history().limits().max_limit, 4);
    assert_eq!(h.canvas().width(), 8);
}

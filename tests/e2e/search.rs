//! E2E tests for the incremental find prompt

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use qtedit::model::position::Position;

fn open_search(harness: &mut EditorTestHarness) {
    harness
        .send_key(KeyCode::Char('f'), KeyModifiers::CONTROL)
        .unwrap();
}

/// Test basic forward search functionality
#[test]
fn test_basic_search_forward() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("test.txt", "hello world\nfoo bar\nhello again\nbaz")
        .unwrap();

    open_search(&mut harness);
    harness.assert_screen_contains("Search: ");

    harness.type_text("hello").unwrap();
    assert_eq!(harness.editor().cursor(), Position::new(0, 0));
    assert_eq!(
        harness.message_line_text(),
        "Search: hello (Use ESC/Arrows/Enter)"
    );

    // Arrow keys walk the matches and wrap around
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().cursor(), Position::new(2, 0));
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().cursor(), Position::new(0, 0));
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().cursor(), Position::new(2, 0));

    // Enter keeps the cursor on the match
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(harness.editor().prompt().is_none());
    assert_eq!(harness.editor().cursor(), Position::new(2, 0));
}

/// The match is drawn with its own colors and removed afterwards
#[test]
fn test_match_highlight_on_screen() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("test.txt", "alpha beta gamma")
        .unwrap();

    open_search(&mut harness);
    harness.type_text("beta").unwrap();
    // gutter is 2 wide, "beta" starts at column 6 of the text
    let matched = harness.screen().cell(0, 8).unwrap().bgcolor();
    let plain = harness.screen().cell(0, 2).unwrap().bgcolor();
    assert_ne!(matched, plain);

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen().cell(0, 8).unwrap().bgcolor(), plain);
}

/// Escape puts the cursor and scroll position back
#[test]
fn test_search_escape_restores_view() {
    let mut harness = EditorTestHarness::new(40, 8).unwrap();
    let mut lines: Vec<String> = (0..40).map(|i| format!("row {i}")).collect();
    lines[35] = "needle".to_string();
    harness
        .load_buffer_from_text("long.txt", &lines.join("\n"))
        .unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();

    open_search(&mut harness);
    harness.type_text("needle").unwrap();
    assert_eq!(harness.editor().cursor(), Position::new(35, 0));
    assert_eq!(harness.editor().viewport().row_offset, 35);

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().cursor(), Position::new(1, 0));
    assert_eq!(harness.editor().viewport().row_offset, 0);
    assert_eq!(harness.get_row_text(0), "1  row 0");
}

/// A query with no match leaves everything where it was
#[test]
fn test_search_not_found() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("test.c", "int x;\nreturn x;\n")
        .unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    let before = harness.editor().cursor();
    let rows_before = harness.editor().document().rows().to_vec();

    open_search(&mut harness);
    harness.type_text("foo").unwrap();
    assert_eq!(harness.editor().cursor(), before);
    assert_eq!(harness.editor().document().rows(), rows_before.as_slice());
}
